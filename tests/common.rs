#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use discountbot::core::bot::{Bot, Reply};
use discountbot::core::clock::FixedClock;
use discountbot::export::Exporter;
use std::env;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

pub fn dbot() -> Command {
    cargo_bin_cmd!("discountbot")
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test datetime")
}

/// Unique, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_discountbot", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Bot with a frozen clock exporting into a fresh temp directory
pub fn test_bot(name: &str, now: &str) -> (Bot<FixedClock>, FixedClock, PathBuf) {
    let dir = temp_dir(name);
    let clock = FixedClock::new(at(now));
    let exporter = Exporter::new(&dir, "excel_file.xlsx", 0xFFFF00);
    (Bot::new(clock.clone(), exporter), clock, dir)
}

pub fn texts(replies: &[Reply]) -> Vec<&str> {
    replies.iter().filter_map(Reply::as_text).collect()
}

/// Walk one complete row through the prompts; returns the final replies
pub fn submit_row(bot: &mut Bot<FixedClock>, user: i64, code: &str) -> Vec<Reply> {
    bot.handle(user, "new");
    bot.handle(user, code);
    bot.handle(user, "Reza Ahmadi");
    bot.handle(user, "2x engine oil");
    bot.handle(user, "4521");
    bot.handle(user, "LPO")
}

/// Raw XML of an entry of an xlsx package
pub fn xlsx_part(path: &Path, part: &str) -> String {
    let file = File::open(path).expect("open xlsx");
    let mut archive = zip::ZipArchive::new(file).expect("xlsx is a zip archive");
    let mut entry = archive.by_name(part).expect("part present");
    let mut xml = String::new();
    entry.read_to_string(&mut xml).expect("read part");
    xml
}

/// Number of `<row>` elements in the first worksheet (header included)
pub fn sheet_rows(path: &Path) -> usize {
    xlsx_part(path, "xl/worksheets/sheet1.xml")
        .matches("<row ")
        .count()
}

/// Decoded entries of `xl/sharedStrings.xml`, in index order
pub fn shared_strings(path: &Path) -> Vec<String> {
    xlsx_part(path, "xl/sharedStrings.xml")
        .split("<si>")
        .skip(1)
        .map(|si| {
            let open = si.find("<t").expect("<t> in <si>");
            let start = open + si[open..].find('>').expect("end of <t>") + 1;
            let end = start + si[start..].find("</t>").expect("</t>");
            si[start..end]
                .replace("&apos;", "'")
                .replace("&quot;", "\"")
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&amp;", "&")
        })
        .collect()
}

/// A worksheet cell as stored in `sheet1.xml`
#[derive(Debug, Clone, PartialEq)]
pub struct SheetCell {
    /// `s=` style index, 0 when absent
    pub style: usize,
    /// `t="s"` cells hold a shared string index
    pub shared: bool,
    pub value: String,
}

fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let key = format!(" {name}=\"");
    let start = tag.find(&key)? + key.len();
    let end = start + tag[start..].find('"')?;
    Some(&tag[start..end])
}

/// Look up a cell such as `"C2"` in the first worksheet
pub fn sheet_cell(path: &Path, reference: &str) -> SheetCell {
    let xml = xlsx_part(path, "xl/worksheets/sheet1.xml");
    let key = format!("<c r=\"{reference}\"");
    let start = xml.find(&key).unwrap_or_else(|| panic!("cell {reference} missing"));
    let rest = &xml[start..];
    let tag_end = rest.find('>').expect("end of <c>");
    let tag = &rest[..tag_end];

    let value = match (rest.find("<v>"), rest.find("</c>")) {
        (Some(v), Some(c)) if v < c => {
            let v_end = rest[v..].find("</v>").expect("</v>") + v;
            rest[v + 3..v_end].to_string()
        }
        _ => String::new(),
    };

    SheetCell {
        style: attr(tag, "s").map_or(0, |s| s.parse().expect("numeric style")),
        shared: attr(tag, "t") == Some("s"),
        value,
    }
}

/// Text of a cell, resolving shared strings
pub fn cell_text(path: &Path, reference: &str) -> String {
    let cell = sheet_cell(path, reference);
    if cell.shared {
        let idx: usize = cell.value.parse().expect("shared string index");
        shared_strings(path)[idx].clone()
    } else {
        cell.value
    }
}

fn section<'a>(xml: &'a str, open: &str, close: &str) -> &'a str {
    let start = xml.find(open).unwrap_or_else(|| panic!("{open} missing"));
    let end = start + xml[start..].find(close).unwrap_or_else(|| panic!("{close} missing"));
    &xml[start..end]
}

/// Raw `<fill>` entry used by the cell format at `style`
pub fn style_fill(path: &Path, style: usize) -> String {
    let styles = xlsx_part(path, "xl/styles.xml");

    let xf = section(&styles, "<cellXfs", "</cellXfs>")
        .split("<xf ")
        .nth(style + 1)
        .unwrap_or_else(|| panic!("xf {style} missing"));
    let fill_id: usize = attr(&format!(" {xf}"), "fillId")
        .map_or(0, |f| f.parse().expect("numeric fillId"));

    section(&styles, "<fills", "</fills>")
        .split("<fill>")
        .nth(fill_id + 1)
        .unwrap_or_else(|| panic!("fill {fill_id} missing"))
        .to_string()
}
