//! JSON formatting that matches what Xcode writes for `.xcstrings` files.
//!
//! Xcode separates keys from values with `" : "`, indents with two spaces and
//! writes empty objects as `{` blank line `}`. Writing catalogs the same way
//! keeps diffs limited to the entries that actually changed.

use std::io;

use serde_json::ser::Formatter;

const INDENT: &[u8] = b"  ";

#[derive(Debug, Default)]
pub struct XcodeFormatter {
    current_indent: usize,
    has_value: bool,
}

impl XcodeFormatter {
    pub fn new() -> Self {
        Self::default()
    }
}

fn indent<W: ?Sized + io::Write>(writer: &mut W, n: usize) -> io::Result<()> {
    for _ in 0..n {
        writer.write_all(INDENT)?;
    }
    Ok(())
}

impl Formatter for XcodeFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
            indent(writer, self.current_indent)?;
        }
        writer.write_all(b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        writer.write_all(if first { b"\n" } else { b",\n" })?;
        indent(writer, self.current_indent)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.current_indent -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
        } else {
            writer.write_all(b"\n\n")?;
        }
        indent(writer, self.current_indent)?;
        writer.write_all(b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        writer.write_all(if first { b"\n" } else { b",\n" })?;
        indent(writer, self.current_indent)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" : ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}
