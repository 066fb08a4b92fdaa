//! Human-readable, colorized report.
//!
//! Each outcome is rendered into a `termcolor::Buffer` first and written to
//! the sink with a single `write_all`, so a line is never split across
//! writes. Without colors the buffer is `Buffer::no_color()` and the bytes
//! are the colored ones minus escape sequences.

use super::{build_msg, indent, prop_string, ProbeCategory};
use crate::probes::{ProbeDesc, ProbedProp, Reporter};
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

pub struct CliReporter<W: Write> {
    w: W,
    colors: bool,
    failed: bool,
}

impl<W: Write> CliReporter<W> {
    pub fn new(w: W, colors: bool) -> Self {
        Self {
            w,
            colors,
            failed: false,
        }
    }

    /// Whether any probe was rejected or errored so far.
    pub fn failed(&self) -> bool {
        self.failed
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.w
    }

    fn buffer(&self) -> Buffer {
        if self.colors {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        }
    }

    fn line(
        &mut self,
        desc: &dyn ProbeDesc,
        prop: Option<&dyn ProbedProp>,
        category: ProbeCategory,
        msg: &str,
    ) -> io::Result<()> {
        let prop = prop_string(prop);
        let mut buf = self.buffer();
        write_name(&mut buf, desc)?;

        let mut spec = ColorSpec::new();
        match category {
            ProbeCategory::Pass => spec.set_fg(Some(Color::Green)),
            ProbeCategory::Warning => spec.set_fg(Some(Color::Yellow)),
            _ => spec.set_fg(Some(Color::Red)).set_bold(true),
        };
        colored(&mut buf, &spec, &prop)?;

        writeln!(buf, "{}", build_msg(&prop, category, msg))?;
        self.w.write_all(buf.as_slice())
    }
}

impl<W: Write> Reporter for CliReporter<W> {
    fn pass(&mut self, desc: &dyn ProbeDesc, prop: Option<&dyn ProbedProp>) -> io::Result<()> {
        self.line(desc, prop, ProbeCategory::Pass, "")
    }

    fn warn(
        &mut self,
        desc: &dyn ProbeDesc,
        prop: Option<&dyn ProbedProp>,
        msg: &str,
    ) -> io::Result<()> {
        self.line(desc, prop, ProbeCategory::Warning, msg)
    }

    fn reject(
        &mut self,
        desc: &dyn ProbeDesc,
        prop: Option<&dyn ProbedProp>,
        msg: &str,
    ) -> io::Result<()> {
        self.failed = true;
        self.line(desc, prop, ProbeCategory::Rejected, msg)
    }

    fn error(
        &mut self,
        desc: &dyn ProbeDesc,
        err: Option<&(dyn std::error::Error + 'static)>,
    ) -> io::Result<()> {
        self.failed = true;

        let mut text = String::from("error");
        if let Some(detail) = err.map(|e| e.to_string()).filter(|e| !e.is_empty()) {
            text.push_str(": ");
            text.push_str(&detail);
        }

        let mut buf = self.buffer();
        write_name(&mut buf, desc)?;
        colored(
            &mut buf,
            ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true),
            &text,
        )?;
        writeln!(buf)?;
        self.w.write_all(buf.as_slice())
    }
}

fn write_name(buf: &mut Buffer, desc: &dyn ProbeDesc) -> io::Result<()> {
    write!(buf, "{}", indent(desc))?;
    colored(
        buf,
        ColorSpec::new()
            .set_fg(Some(Color::White))
            .set_intense(true),
        &format!("{}: ", desc.display_name()),
    )
}

fn colored(buf: &mut Buffer, spec: &ColorSpec, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    buf.set_color(spec)?;
    write!(buf, "{}", text)?;
    buf.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::{ProbeDescriptor, ProbePath};
    use std::fmt;

    fn desc(segments: &[&str], name: &str) -> ProbeDescriptor {
        let path = segments.iter().fold(ProbePath::root(), |p, s| p.join(*s));
        ProbeDescriptor::new(path, name)
    }

    fn render(colors: bool, f: impl FnOnce(&mut CliReporter<Vec<u8>>)) -> (String, bool) {
        let mut reporter = CliReporter::new(Vec::new(), colors);
        f(&mut reporter);
        let failed = reporter.failed();
        (String::from_utf8(reporter.into_inner()).unwrap(), failed)
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[derive(Debug)]
    struct Blank;

    impl fmt::Display for Blank {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Ok(())
        }
    }

    impl std::error::Error for Blank {}

    #[test]
    fn pass_line_has_category_tag() {
        let (out, failed) = render(false, |r| {
            r.pass(&desc(&["os"], "Operating system"), Some(&"Linux"))
                .unwrap()
        });
        assert_eq!(out, "Operating system: Linux (pass)\n");
        assert!(!failed);
    }

    #[test]
    fn warn_and_reject_carry_messages() {
        let (out, failed) = render(false, |r| {
            r.warn(&desc(&["os", "kernel"], "Kernel"), None, "unknown")
                .unwrap();
            r.reject(&desc(&["mem"], "Memory"), Some(&"512M"), "too little")
                .unwrap();
        });
        assert_eq!(
            out,
            "  Kernel: (warning: unknown)\nMemory: 512M (rejected: too little)\n"
        );
        assert!(failed);
    }

    #[test]
    fn error_without_detail_ends_in_error() {
        let (out, failed) = render(false, |r| {
            r.error(&desc(&["cpu"], "CPU"), None).unwrap();
            r.error(&desc(&["cpu"], "CPU"), Some(&Blank)).unwrap();
        });
        assert_eq!(out, "CPU: error\nCPU: error\n");
        assert!(failed);
    }

    #[test]
    fn error_with_detail_is_appended() {
        let err = io::Error::new(io::ErrorKind::Other, "permission denied");
        let (out, _) = render(false, |r| {
            r.error(&desc(&["a", "b", "c"], "Deep"), Some(&err))
                .unwrap()
        });
        assert_eq!(out, "    Deep: error: permission denied\n");
    }

    #[test]
    fn plain_output_equals_colored_output_without_escapes() {
        let err = io::Error::new(io::ErrorKind::Other, "boom");
        let script = |r: &mut CliReporter<Vec<u8>>| {
            r.pass(&desc(&["os"], "Operating system"), Some(&"Linux"))
                .unwrap();
            r.warn(&desc(&["os", "k"], "Kernel"), Some(&"4.4"), "old")
                .unwrap();
            r.reject(&desc(&["d"], "Disk"), None, "").unwrap();
            r.error(&desc(&["x"], "X"), Some(&err)).unwrap();
        };
        let (colored, _) = render(true, script);
        let (plain, _) = render(false, script);

        assert!(colored.contains('\x1b'));
        assert!(!plain.contains('\x1b'));
        assert_eq!(strip_ansi(&colored), plain);
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_returned() {
        let mut reporter = CliReporter::new(BrokenSink, false);
        let err = reporter
            .pass(&desc(&["os"], "Operating system"), None)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
