// SPDX-FileCopyrightText: 2026 Lantern Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal indented XML writer.

use std::fmt::Write;

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Builds an XML document one element at a time, indenting one space per level.
#[derive(Debug, Default)]
pub(crate) struct XmlWriter {
    buf: String,
    stack: Vec<&'static str>,
}

impl XmlWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn raw_line(&mut self, line: &str) {
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    fn indent(&mut self) {
        for _ in 0..self.stack.len() {
            self.buf.push(' ');
        }
    }

    fn open_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.indent();
        self.buf.push('<');
        self.buf.push_str(name);
        for (key, value) in attrs {
            let _ = write!(self.buf, " {key}=\"{}\"", escape(value));
        }
    }

    pub(crate) fn start(&mut self, name: &'static str, attrs: &[(&str, &str)]) {
        self.open_tag(name, attrs);
        self.buf.push_str(">\n");
        self.stack.push(name);
    }

    pub(crate) fn end(&mut self) {
        if let Some(name) = self.stack.pop() {
            self.indent();
            let _ = writeln!(self.buf, "</{name}>");
        }
    }

    /// `<name attrs>text</name>` on one line.
    pub(crate) fn text(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) {
        self.open_tag(name, attrs);
        let _ = writeln!(self.buf, ">{}</{name}>", escape(text));
    }

    /// Self-closing `<name attrs/>`.
    pub(crate) fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) {
        self.open_tag(name, attrs);
        self.buf.push_str("/>\n");
    }

    pub(crate) fn finish(mut self) -> String {
        while !self.stack.is_empty() {
            self.end();
        }
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"a<b & "c">'d'"#), "a&lt;b &amp; &quot;c&quot;&gt;&apos;d&apos;");
    }

    #[test]
    fn nests_and_closes() {
        let mut w = XmlWriter::new();
        w.start("Root", &[("a", "1")]);
        w.text("Name", &[], "x & y");
        w.empty("Leaf", &[("b", "2")]);
        let out = w.finish();
        assert_eq!(
            out,
            "<Root a=\"1\">\n <Name>x &amp; y</Name>\n <Leaf b=\"2\"/>\n</Root>\n"
        );
    }
}
