//! Adapter: expose a modern printer through the legacy printer interface.

/// Interface existing callers were written against.
pub trait LegacyPrinter {
    fn print_old(&self, message: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OldPrinter;

impl LegacyPrinter for OldPrinter {
    fn print_old(&self, message: &str) -> String {
        format!("Old message: {message}")
    }
}

/// Printer with the new interface, incompatible with [`LegacyPrinter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ModernPrinter;

impl ModernPrinter {
    pub fn print_new(&self, message: &str) -> String {
        format!("New message: {message}")
    }
}

/// Makes a [`ModernPrinter`] usable wherever a [`LegacyPrinter`] is expected.
#[derive(Debug, Clone, Default)]
pub struct PrinterAdapter {
    printer: ModernPrinter,
}

impl PrinterAdapter {
    pub fn new(printer: ModernPrinter) -> Self {
        Self { printer }
    }
}

impl LegacyPrinter for PrinterAdapter {
    fn print_old(&self, message: &str) -> String {
        self.printer.print_new(message)
    }
}

/// Client code that only knows the legacy interface.
pub fn use_printer(printer: &dyn LegacyPrinter) -> String {
    printer.print_old("Hello, world!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_adapter_when_used_as_legacy_printer_then_routes_to_modern_printer() {
        let adapter = PrinterAdapter::new(ModernPrinter);
        assert_eq!(use_printer(&adapter), "New message: Hello, world!");
    }

    #[test]
    fn given_old_printer_when_used_then_keeps_old_format() {
        assert_eq!(use_printer(&OldPrinter), "Old message: Hello, world!");
    }
}
