//! Named demos for `nulbuf`, selectable from the command line.

use std::io::{self, Write};

use nulbuf::{cstr, NulBuf, NulBufError};
use thiserror::Error;

pub const SECTION: &str = "Hand-rolled NulBuf & C-string utils";

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Buffer error: {0}")]
    Buffer(#[from] NulBufError),
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

pub type DemoFn = fn(&mut dyn Write) -> Result<(), DemoError>;

pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    pub run: DemoFn,
}

static DEMOS: [Demo; 3] = [
    Demo {
        name: "rule_of_five",
        description: "Copy/move/assign correctness",
        run: demo_rule_of_five,
    },
    Demo {
        name: "append_capacity",
        description: "append/push/reserve/shrink_to_fit",
        run: demo_append_and_capacity,
    },
    Demo {
        name: "cstr_utils",
        description: "copy_terminated/cat_terminated/terminated_len/duplicate_terminated",
        run: demo_cstr_utils,
    },
];

#[must_use]
pub fn demos() -> &'static [Demo] {
    &DEMOS
}

#[must_use]
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|d| d.name == name)
}

/// Prints the section title, every demo with its description, and a usage line.
///
/// # Errors
///
/// From the underlying writer.
pub fn print_list(out: &mut dyn Write, program: &str) -> io::Result<()> {
    writeln!(out, "Section: {SECTION}")?;
    writeln!(out, "Available demos:")?;
    for d in demos() {
        writeln!(out, "  - {}  : {}", d.name, d.description)?;
    }
    writeln!(out)?;
    writeln!(out, "Run: {program} <demo-name>")
}

/// Prints a blank line, then `---- label ` (if any) and a dashed rule.
///
/// # Errors
///
/// From the underlying writer.
pub fn section_header(out: &mut dyn Write, label: &str) -> io::Result<()> {
    writeln!(out)?;
    if !label.is_empty() {
        write!(out, "---- {label} ")?;
    }
    writeln!(out, "-------------------------------------------")
}

/// Lists the demos when `demo` is `None` or `list` is set, otherwise runs the
/// named demo. Returns the process exit status.
pub fn dispatch(
    list: bool,
    demo: Option<&str>,
    program: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8 {
    let name = match demo {
        Some(name) if !list => name,
        _ => {
            return match print_list(out, program) {
                Ok(()) => 0,
                Err(e) => {
                    let _ = writeln!(err, "Output error: {e}");
                    1
                }
            };
        }
    };

    let Some(demo) = find(name) else {
        let _ = writeln!(err, "Unknown demo '{name}'. Use --list to see options.");
        return 1;
    };

    log::info!("running demo {}", demo.name);
    match (demo.run)(out) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Demo '{}' failed: {e}", demo.name);
            1
        }
    }
}

fn show(buf: &NulBuf) -> String {
    String::from_utf8_lossy(buf.as_bytes()).into_owned()
}

fn demo_rule_of_five(out: &mut dyn Write) -> Result<(), DemoError> {
    section_header(out, "Rule of Five sanity")?;

    let mut a = NulBuf::from_bytes(b"hello")?;
    let mut b = a.try_clone()?;
    let c = a.take();

    let mut d = NulBuf::new();
    d.assign_from(&b)?;

    let mut e = NulBuf::new();
    e.assign_take(&mut b);

    log::debug!("moved-from buffers: a={a:?} b={b:?}");

    writeln!(out, "c: {}", show(&c))?;
    writeln!(out, "d: {}", show(&d))?;
    writeln!(out, "e: {}", show(&e))?;
    Ok(())
}

fn demo_append_and_capacity(out: &mut dyn Write) -> Result<(), DemoError> {
    section_header(out, "append & capacity")?;

    let mut s = NulBuf::from_bytes(b"ab")?;
    s.reserve(8)?;
    s.append(b"cd")?;
    s.push(b'e')?;

    writeln!(
        out,
        "{} (size={}, cap={})",
        show(&s),
        s.len(),
        s.capacity()
    )?;

    s.shrink_to_fit()?;
    writeln!(out, "after shrink cap={}", s.capacity())?;
    Ok(())
}

fn demo_cstr_utils(out: &mut dyn Write) -> Result<(), DemoError> {
    section_header(out, "cstr utils")?;

    let dup = cstr::duplicate_terminated(b"World")?;

    let mut buf = [0u8; 32];
    cstr::copy_terminated(&mut buf, b"Hello ")?;
    let joined = cstr::cat_terminated(&mut buf, &dup)?;
    let text = String::from_utf8_lossy(joined).into_owned();

    writeln!(out, "{text} (len={})", cstr::terminated_len(&buf))?;
    Ok(())
}
