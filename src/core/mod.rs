pub mod bot;
pub mod builder;
pub mod clock;
pub mod prompts;
pub mod session;
pub mod validator;
