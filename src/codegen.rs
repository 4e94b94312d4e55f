use crate::semantic::r#type::{Operand, VarType};

const INDENT: &str = "    ";

/// Buffered C output. Fragments are appended as the parser recognizes
/// constructs; the buffer is only handed out if the run had no errors.
#[derive(Debug)]
pub struct Emitter {
    buf: String,
    indent: usize,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            buf: String::from("#include <stdio.h>\n"),
            indent: 0,
        }
    }

    pub fn fragment(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Starts a new line at the current indentation.
    pub fn newline(&mut self) {
        self.buf.push('\n');
        for _ in 0..self.indent {
            self.buf.push_str(INDENT);
        }
    }

    /// Leaves exactly one blank line before the next top-level item.
    fn separate(&mut self) {
        while !self.buf.ends_with("\n\n") {
            self.buf.push('\n');
        }
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// `int a, b;` on its own line.
    pub fn declare(&mut self, ty: VarType, names: &[String]) {
        self.newline();
        self.buf.push_str(ty.c_name());
        self.buf.push(' ');
        self.buf.push_str(&names.join(", "));
        self.buf.push(';');
    }

    pub fn procedure_header(&mut self, name: &str) {
        self.separate();
        self.buf.push_str("void ");
        self.buf.push_str(name);
        self.buf.push('(');
    }

    /// One parameter group: `int a, int b`.
    pub fn parameters(&mut self, ty: VarType, names: &[Operand]) {
        let group = names
            .iter()
            .map(|operand| format!("{} {}", ty.c_name(), operand.name))
            .collect::<Vec<_>>()
            .join(", ");
        self.buf.push_str(&group);
    }

    /// ` {` at the end of a header, then one level deeper.
    pub fn open_block(&mut self) {
        self.buf.push_str(" {");
        self.indent();
    }

    pub fn close_block(&mut self) {
        self.dedent();
        self.newline();
        self.buf.push('}');
    }

    pub fn main_header(&mut self) {
        self.separate();
        self.buf.push_str("int main(void)");
        self.open_block();
    }

    pub fn main_footer(&mut self) {
        self.newline();
        self.buf.push_str("return 0;");
        self.close_block();
        self.buf.push('\n');
    }

    /// `scanf(" %d %f", &a, &b);` or `printf(" %d %f", a, b);`, with
    /// operands in source order.
    pub fn read_write(&mut self, is_read: bool, operands: &[Operand]) {
        let (function, prefix) = if is_read { ("scanf", "&") } else { ("printf", "") };

        let format: String = operands
            .iter()
            .map(|operand| format!(" {}", operand.format_spec()))
            .collect();
        let arguments: String = operands
            .iter()
            .map(|operand| format!(", {prefix}{}", operand.name))
            .collect();

        self.newline();
        self.buf
            .push_str(&format!("{function}(\"{format}\"{arguments});"));
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// The artifact, or nothing if any error was recorded.
    pub fn finish(self, error_count: usize) -> Option<String> {
        (error_count == 0).then_some(self.buf)
    }
}
