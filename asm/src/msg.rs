use color_print::ceprintln;

#[derive(Debug)]
pub enum Msg {
    Error(String),
    Warn(String),
}

impl Msg {
    pub fn header(&self) {
        match self {
            Msg::Error(msg) => ceprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => ceprintln!("<yellow,bold>warn</>: {}", msg),
        }
    }

    pub fn print(&self, info: (&str, usize, &str)) {
        let (file, line, raw) = info;
        self.header();
        ceprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        ceprintln!("      <blue>|</>");
        ceprintln!(" <blue>{:>4} |</> {}", line, raw);
        ceprintln!("      <blue>|</>");
    }
}
