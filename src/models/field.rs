use std::fmt;

/// Columns of a collected row, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Name,
    NationalCode,
    DriverName,
    Items,
    InvoiceNumber,
    TimeOut,
    TimeIn,
    Category,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Date,
        Field::Name,
        Field::NationalCode,
        Field::DriverName,
        Field::Items,
        Field::InvoiceNumber,
        Field::TimeOut,
        Field::TimeIn,
        Field::Category,
    ];

    /// Column title used in the exported sheet.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Name => "Name",
            Field::NationalCode => "National code",
            Field::DriverName => "Snapp driver's name",
            Field::Items => "Items",
            Field::InvoiceNumber => "Invoice no",
            Field::TimeOut => "Time out",
            Field::TimeIn => "Time in",
            Field::Category => "Staff or LPO",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
