//! Human-readable dump of a class's tables.
//!
//! Sections, in table order: `[header]`, `[strings]`, `[methods]`,
//! `[properties]`, `[constructors]`. Every record line ends with a dimmed
//! comment holding the raw plumbing (parameter offset, flag word).

use std::fmt::Write as _;

use wobject_core::Colors;

use super::flags::MethodKind;
use super::format::width_for_count;
use super::tables::{MethodView, MetaTables};

/// Generate a human-readable dump of the tables.
pub fn dump(tables: &MetaTables<'_>, colors: Colors) -> String {
    let mut out = String::new();
    dump_header(&mut out, tables, &colors);
    dump_strings(&mut out, tables, &colors);
    dump_methods(&mut out, tables, &colors);
    dump_properties(&mut out, tables, &colors);
    dump_constructors(&mut out, tables, &colors);
    out
}

fn section(out: &mut String, title: &str, c: &Colors) {
    writeln!(out, "{}[{title}]{}", c.blue, c.reset).unwrap();
}

fn dump_header(out: &mut String, tables: &MetaTables<'_>, c: &Colors) {
    let h = tables.header();
    section(out, "header", c);
    writeln!(out, "revision     {}", h.revision).unwrap();
    writeln!(out, "class        {}", c.name(tables.class_name())).unwrap();
    writeln!(out, "methods      {} @ {}", h.method_count, h.method_offset).unwrap();
    writeln!(out, "properties   {} @ {}", h.property_count, h.property_offset).unwrap();
    writeln!(
        out,
        "constructors {} @ {}",
        h.constructor_count, h.constructor_offset
    )
    .unwrap();
    writeln!(out, "signals      {}", h.signal_count).unwrap();
    out.push('\n');
}

fn dump_strings(out: &mut String, tables: &MetaTables<'_>, c: &Colors) {
    let strings = tables.strings();
    let w = width_for_count(strings.len());
    section(out, "strings", c);
    for (i, s) in strings.iter() {
        writeln!(out, "S{i:0w$} {}{s:?}{}", c.green, c.reset).unwrap();
    }
    out.push('\n');
}

fn dump_methods(out: &mut String, tables: &MetaTables<'_>, c: &Colors) {
    let w = width_for_count(tables.method_count());
    section(out, "methods", c);
    for (i, method) in tables.methods().enumerate() {
        let ret = tables.type_display(method.return_type());
        writeln!(
            out,
            "M{i:0w$} {:<6} {} {}",
            method.kind().keyword(),
            c.literal(&ret),
            format_call(tables, &method, c)
        )
        .unwrap();
    }
    out.push('\n');
}

fn dump_properties(out: &mut String, tables: &MetaTables<'_>, c: &Colors) {
    let w = width_for_count(tables.property_count());
    section(out, "properties", c);
    for (i, property) in tables.properties().enumerate() {
        let ty = tables.type_display(property.type_token());
        writeln!(
            out,
            "P{i:0w$} {} {}{}  ; {:#x}{}",
            c.literal(&ty),
            c.name(property.name()),
            c.dim,
            property.flags().bits(),
            c.reset
        )
        .unwrap();
    }
    out.push('\n');
}

fn dump_constructors(out: &mut String, tables: &MetaTables<'_>, c: &Colors) {
    let w = width_for_count(tables.constructor_count());
    section(out, "constructors", c);
    for (i, ctor) in tables.constructors().enumerate() {
        // Non-constructor kinds are spelled out.
        let kind = match ctor.kind() {
            MethodKind::Constructor => String::new(),
            other => format!("{} ", other.keyword()),
        };
        writeln!(out, "C{i:0w$} {kind}{}", format_call(tables, &ctor, c)).unwrap();
    }
}

/// `name(type arg, type)  ; @params flags`
fn format_call(tables: &MetaTables<'_>, method: &MethodView<'_>, c: &Colors) -> String {
    let args: Vec<String> = (0..method.argc())
        .map(|i| {
            let ty = method
                .arg_type(i)
                .map(|t| tables.type_display(t))
                .unwrap_or_default();
            match method.arg_name(i) {
                Some(name) => format!("{} {name}", c.literal(&ty)),
                None => c.literal(&ty),
            }
        })
        .collect();
    format!(
        "{}({}){}  ; @{} {:#04x}{}",
        c.name(method.name()),
        args.join(", "),
        c.dim,
        method.record.parameters,
        method.flags().bits(),
        c.reset
    )
}
