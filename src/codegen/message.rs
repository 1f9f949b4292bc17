//! Per-message codec rendering: one Rust module per `BO_` block, holding the
//! message constants, value-table enums and the encode/decode struct.

use crate::types::ast::{Message, Signal};

use super::{format_f64, snake_ident};

/// How a signal surfaces in the generated struct.
enum FieldKind {
    /// Value-table signal, decoded to a generated enum; scale/offset ignored.
    Enum(String),
    /// Scaled signal, decoded to `f64` as `raw * scale + offset`.
    Float,
    /// Unit-scale signed integer signal.
    Signed,
    /// Unit-scale unsigned integer signal.
    Unsigned,
}

fn field_kind(signal: &Signal) -> FieldKind {
    if signal.has_value_table() {
        FieldKind::Enum(format!("{}_values", signal.name))
    } else if signal.scale != 1.0 || signal.offset != 0.0 {
        FieldKind::Float
    } else if signal.is_signed {
        FieldKind::Signed
    } else {
        FieldKind::Unsigned
    }
}

fn field_type(signal: &Signal) -> String {
    match field_kind(signal) {
        FieldKind::Enum(name) => name,
        FieldKind::Float => "f64".into(),
        FieldKind::Signed => "i64".into(),
        FieldKind::Unsigned => "u64".into(),
    }
}

fn field_default(signal: &Signal) -> String {
    match field_kind(signal) {
        FieldKind::Enum(name) => format!("{name}::default()"),
        FieldKind::Float => "0.0".into(),
        FieldKind::Signed | FieldKind::Unsigned => "0".into(),
    }
}

fn extract_expr(signal: &Signal) -> String {
    format!(
        "rt::extract_bits(data, {}, {}, {})",
        signal.start_bit, signal.length, signal.little_endian
    )
}

fn decode_line(signal: &Signal) -> String {
    let extract = extract_expr(signal);
    match field_kind(signal) {
        FieldKind::Enum(name) => {
            let raw = if signal.is_signed {
                format!("rt::sign_extend({extract}, {})", signal.length)
            } else {
                format!("{extract} as i64")
            };
            format!("self.{} = {name}::from_raw({raw});", signal.name)
        }
        FieldKind::Float => {
            let raw = if signal.is_signed {
                format!("rt::sign_extend({extract}, {})", signal.length)
            } else {
                extract
            };
            format!(
                "self.{} = {raw} as f64 * {} + {};",
                signal.name,
                format_f64(signal.scale),
                format_f64(signal.offset)
            )
        }
        FieldKind::Signed => format!(
            "self.{} = rt::sign_extend({extract}, {});",
            signal.name, signal.length
        ),
        FieldKind::Unsigned => format!("self.{} = {extract};", signal.name),
    }
}

fn encode_line(signal: &Signal) -> String {
    let raw = match field_kind(signal) {
        FieldKind::Enum(_) => {
            if signal.is_signed {
                format!("rt::clamp_signed(self.{}.raw(), {})", signal.name, signal.length)
            } else {
                format!(
                    "rt::clamp_unsigned(self.{}.raw() as u64, {})",
                    signal.name, signal.length
                )
            }
        }
        FieldKind::Float => format!(
            "rt::to_raw(self.{}, {}, {}, {}, {})",
            signal.name,
            format_f64(signal.scale),
            format_f64(signal.offset),
            signal.length,
            signal.is_signed
        ),
        FieldKind::Signed => format!("rt::clamp_signed(self.{}, {})", signal.name, signal.length),
        FieldKind::Unsigned => {
            format!("rt::clamp_unsigned(self.{}, {})", signal.name, signal.length)
        }
    };
    format!(
        "rt::insert_bits(&mut data, {}, {}, {}, {raw});",
        signal.start_bit, signal.length, signal.little_endian
    )
}

/// Expression reading the current mux group index out of the multiplexor
/// field.
fn group_expr(multiplexor: &Signal) -> String {
    match field_kind(multiplexor) {
        FieldKind::Enum(_) => format!("self.{}.raw() as u32", multiplexor.name),
        _ => format!("self.{} as u32", multiplexor.name),
    }
}

/// File name of one generated codec module.
pub(crate) fn message_file_name(base: &str, msg: &Message) -> String {
    format!("{base}_{}.rs", snake_ident(&msg.name))
}

/// Renders the codec module for one message.
pub(crate) fn render_message(msg: &Message) -> String {
    let mut out = String::new();
    out.push_str("// Generated by dbc_gen. Do not edit.\n");
    out.push_str("#![allow(non_camel_case_types, non_snake_case, dead_code, unused_variables, unused_mut, unused_imports, unreachable_patterns)]\n");
    out.push('\n');
    out.push_str("use dbc_gen::rt;\n");
    out.push('\n');

    render_consts(&mut out, msg);
    for signal in &msg.signals {
        render_signal_consts(&mut out, signal);
    }
    for signal in &msg.signals {
        if signal.has_value_table() {
            render_value_enum(&mut out, signal);
        }
    }
    render_struct(&mut out, msg);
    render_impl(&mut out, msg);
    out
}

fn render_consts(out: &mut String, msg: &Message) {
    out.push_str(&format!("pub const NAME: &str = {:?};\n", msg.name));
    out.push_str(&format!("pub const ID: u32 = {};\n", msg.id));
    out.push_str(&format!("pub const DLC: u32 = {};\n", msg.dlc));
    out.push_str(&format!(
        "pub const TRANSMITTER: &str = {:?};\n",
        msg.transmitter
    ));
    out.push_str(&format!("pub const COMMENT: &str = {:?};\n", msg.comment));
    out.push_str(&format!(
        "pub const IS_MULTIPLEXED: bool = {};\n",
        msg.is_multiplexed
    ));
    out.push_str(&format!(
        "pub const SIGNAL_COUNT: usize = {};\n",
        msg.signals.len()
    ));
    let names: Vec<String> = msg.signals.iter().map(|s| format!("{:?}", s.name)).collect();
    out.push_str(&format!(
        "pub const SIGNAL_NAMES: [&str; {}] = [{}];\n",
        names.len(),
        names.join(", ")
    ));
    if let Some(multiplexor) = msg.multiplexor() {
        out.push_str(&format!(
            "pub const MULTIPLEXOR_NAME: &str = {:?};\n",
            multiplexor.name
        ));
        let indexes: Vec<String> = msg.mux_group_indexes().iter().map(u32::to_string).collect();
        out.push_str(&format!(
            "pub const MUX_GROUP_INDEXES: [u32; {}] = [{}];\n",
            indexes.len(),
            indexes.join(", ")
        ));
        if let Some(start) = msg.start_mux_group_index() {
            out.push_str(&format!("pub const START_MUX_GROUP_INDEX: u32 = {start};\n"));
        }
    }
    out.push('\n');
}

fn render_signal_consts(out: &mut String, signal: &Signal) {
    out.push_str(&format!("pub mod {} {{\n", signal.name));
    out.push_str(&format!("    pub const START_BIT: u32 = {};\n", signal.start_bit));
    out.push_str(&format!("    pub const LENGTH: u32 = {};\n", signal.length));
    out.push_str(&format!(
        "    pub const LITTLE_ENDIAN: bool = {};\n",
        signal.little_endian
    ));
    out.push_str(&format!("    pub const IS_SIGNED: bool = {};\n", signal.is_signed));
    out.push_str(&format!("    pub const SCALE: f64 = {};\n", format_f64(signal.scale)));
    out.push_str(&format!("    pub const OFFSET: f64 = {};\n", format_f64(signal.offset)));
    out.push_str(&format!(
        "    pub const MINIMUM: f64 = {};\n",
        format_f64(signal.minimum)
    ));
    out.push_str(&format!(
        "    pub const MAXIMUM: f64 = {};\n",
        format_f64(signal.maximum)
    ));
    out.push_str(&format!("    pub const UNIT: &str = {:?};\n", signal.unit));
    out.push_str("}\n\n");
}

fn render_value_enum(out: &mut String, signal: &Signal) {
    let name = format!("{}_values", signal.name);
    out.push_str("#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]\n");
    out.push_str("#[repr(i64)]\n");
    out.push_str(&format!("pub enum {name} {{\n"));
    for (i, mapping) in signal.value_table.iter().enumerate() {
        if i == 0 {
            out.push_str("    #[default]\n");
        }
        out.push_str(&format!("    {} = {},\n", mapping.description, mapping.raw_value));
    }
    out.push_str("}\n\n");
    out.push_str(&format!("impl {name} {{\n"));
    out.push_str("    pub fn from_raw(raw: i64) -> Self {\n");
    out.push_str("        match raw {\n");
    for mapping in &signal.value_table {
        out.push_str(&format!(
            "            {} => {name}::{},\n",
            mapping.raw_value, mapping.description
        ));
    }
    out.push_str(&format!("            _ => {name}::default(),\n"));
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push('\n');
    out.push_str("    pub fn raw(self) -> i64 {\n");
    out.push_str("        self as i64\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");
}

fn render_struct(out: &mut String, msg: &Message) {
    if !msg.comment.is_empty() {
        out.push_str(&format!("/// {}\n", msg.comment));
    }
    out.push_str("#[derive(Clone, Debug, PartialEq)]\n");
    out.push_str(&format!("pub struct {} {{\n", msg.name));
    for signal in &msg.signals {
        if !signal.comment.is_empty() {
            out.push_str(&format!("    /// {}\n", signal.comment));
        }
        out.push_str(&format!("    pub {}: {},\n", signal.name, field_type(signal)));
    }
    if msg.multiplexor().is_some() {
        out.push_str("    seen_mux: rt::SeenSet,\n");
    }
    out.push_str("}\n\n");
}

fn render_impl(out: &mut String, msg: &Message) {
    let multiplexor = msg.multiplexor();
    out.push_str(&format!("impl {} {{\n", msg.name));

    out.push_str("    pub fn new() -> Self {\n");
    out.push_str(&format!("        {} {{\n", msg.name));
    for signal in &msg.signals {
        out.push_str(&format!(
            "            {}: {},\n",
            signal.name,
            field_default(signal)
        ));
    }
    if multiplexor.is_some() {
        let indexes: Vec<String> = msg.mux_group_indexes().iter().map(u32::to_string).collect();
        out.push_str(&format!(
            "            seen_mux: rt::SeenSet::new(vec![{}]),\n",
            indexes.join(", ")
        ));
    }
    out.push_str("        }\n");
    out.push_str("    }\n\n");

    render_decode(out, msg, multiplexor);
    render_encode(out, msg, multiplexor);

    if multiplexor.is_some() {
        out.push_str("    /// `true` once every declared mux group has been decoded since the\n");
        out.push_str("    /// last clear.\n");
        out.push_str("    pub fn all_multiplexed_indexes_seen(&self) -> bool {\n");
        out.push_str("        self.seen_mux.all_seen()\n");
        out.push_str("    }\n\n");
        out.push_str("    pub fn clear_seen_multiplexed_indexes(&mut self) {\n");
        out.push_str("        self.seen_mux.reset()\n");
        out.push_str("    }\n");
    }
    // trim the trailing blank line left by the last block
    if out.ends_with("\n\n") {
        out.truncate(out.len() - 1);
    }
    out.push_str("}\n\n");

    out.push_str(&format!("impl Default for {} {{\n", msg.name));
    out.push_str("    fn default() -> Self {\n");
    out.push_str(&format!("        {}::new()\n", msg.name));
    out.push_str("    }\n");
    out.push_str("}\n");
}

fn render_decode(out: &mut String, msg: &Message, multiplexor: Option<&Signal>) {
    out.push_str("    /// Unpacks one frame payload into the struct fields.\n");
    out.push_str("    pub fn decode(&mut self, data: &[u8; 8]) -> bool {\n");
    match multiplexor {
        Some(mux) => {
            out.push_str(&format!("        {}\n", decode_line(mux)));
            for signal in msg.signals.iter().filter(|s| s.is_plain()) {
                out.push_str(&format!("        {}\n", decode_line(signal)));
            }
            out.push_str(&format!("        let group = {};\n", group_expr(mux)));
            out.push_str("        match group {\n");
            for idx in msg.mux_group_indexes() {
                out.push_str(&format!("            {idx} => {{\n"));
                for signal in msg.signals_in_group(idx) {
                    out.push_str(&format!("                {}\n", decode_line(signal)));
                }
                out.push_str("            }\n");
            }
            out.push_str("            _ => {}\n");
            out.push_str("        }\n");
            out.push_str("        self.seen_mux.mark(group);\n");
        }
        None => {
            for signal in msg.signals.iter().filter(|s| !s.is_multiplex) {
                out.push_str(&format!("        {}\n", decode_line(signal)));
            }
        }
    }
    out.push_str("        true\n");
    out.push_str("    }\n\n");
}

fn render_encode(out: &mut String, msg: &Message, multiplexor: Option<&Signal>) {
    out.push_str("    /// Packs the struct fields into a frame payload.\n");
    out.push_str("    pub fn encode(&self) -> [u8; 8] {\n");
    out.push_str("        let mut data = [0u8; 8];\n");
    match multiplexor {
        Some(mux) => {
            out.push_str(&format!("        {}\n", encode_line(mux)));
            for signal in msg.signals.iter().filter(|s| s.is_plain()) {
                out.push_str(&format!("        {}\n", encode_line(signal)));
            }
            out.push_str(&format!("        match {} {{\n", group_expr(mux)));
            for idx in msg.mux_group_indexes() {
                out.push_str(&format!("            {idx} => {{\n"));
                for signal in msg.signals_in_group(idx) {
                    out.push_str(&format!("                {}\n", encode_line(signal)));
                }
                out.push_str("            }\n");
            }
            out.push_str("            _ => {}\n");
            out.push_str("        }\n");
        }
        None => {
            for signal in msg.signals.iter().filter(|s| !s.is_multiplex) {
                out.push_str(&format!("        {}\n", encode_line(signal)));
            }
        }
    }
    out.push_str("        data\n");
    out.push_str("    }\n\n");
}
