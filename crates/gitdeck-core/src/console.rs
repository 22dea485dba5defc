/// User-facing output stream. Everything the tool says to the user goes
/// through here so flows can be exercised without a terminal.
pub trait Console {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }
}
