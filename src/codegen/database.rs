//! Aggregate database rendering: the `<base>.rs` module bundling every
//! message codec, the `Messages` enum and the id dispatch.

use crate::types::ast::Database;

use super::{message, snake_ident, unique_messages};

/// Renders the aggregate module for the whole database.
pub(crate) fn render_database(base: &str, db: &Database) -> String {
    let unique = unique_messages(db);
    let mut out = String::new();
    out.push_str("// Generated by dbc_gen. Do not edit.\n");
    out.push_str("#![allow(non_camel_case_types, non_snake_case, dead_code, unused_variables, unused_mut, unused_imports, unreachable_patterns)]\n");
    out.push('\n');

    for msg in &unique {
        out.push_str(&format!(
            "#[path = \"{}\"]\n",
            message::message_file_name(base, msg)
        ));
        out.push_str(&format!("pub mod {};\n", snake_ident(&msg.name)));
    }
    out.push_str(&format!("#[path = \"{base}_parser.rs\"]\n"));
    out.push_str("pub mod parser;\n");
    out.push('\n');

    out.push_str(&format!("pub const NAME: &str = {base:?};\n"));
    let mut ids: Vec<u32> = unique.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    let ids: Vec<String> = ids.iter().map(u32::to_string).collect();
    out.push_str(&format!(
        "pub const MESSAGE_IDS: [u32; {}] = [{}];\n",
        ids.len(),
        ids.join(", ")
    ));
    out.push('\n');

    out.push_str("/// Which message a frame id resolved to.\n");
    out.push_str("#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]\n");
    out.push_str("#[repr(u32)]\n");
    out.push_str("pub enum Messages {\n");
    out.push_str("    #[default]\n");
    out.push_str("    Unknown = 0xFFFF_FFFF,\n");
    for msg in &unique {
        out.push_str(&format!("    {} = {},\n", msg.name, msg.id));
    }
    out.push_str("}\n\n");

    out.push_str("#[derive(Clone, Debug, Default, PartialEq)]\n");
    out.push_str(&format!("pub struct {base}_t {{\n"));
    for msg in &unique {
        out.push_str(&format!(
            "    pub {}: {}::{},\n",
            msg.name,
            snake_ident(&msg.name),
            msg.name
        ));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("impl {base}_t {{\n"));
    out.push_str("    pub fn new() -> Self {\n");
    out.push_str("        Self::default()\n");
    out.push_str("    }\n\n");

    out.push_str("    /// Routes one frame payload to the matching message codec and\n");
    out.push_str("    /// decodes it in place.\n");
    out.push_str("    pub fn decode(&mut self, id: u32, data: &[u8; 8]) -> Messages {\n");
    for msg in &unique {
        let module = snake_ident(&msg.name);
        out.push_str(&format!("        if id == {module}::ID {{\n"));
        out.push_str(&format!("            self.{}.decode(data);\n", msg.name));
        out.push_str(&format!("            return Messages::{};\n", msg.name));
        out.push_str("        }\n");
    }
    out.push_str("        Messages::Unknown\n");
    out.push_str("    }\n\n");

    out.push_str("    pub fn message_name(message: Messages) -> &'static str {\n");
    out.push_str("        match message {\n");
    for msg in &unique {
        out.push_str(&format!(
            "            Messages::{} => {}::NAME,\n",
            msg.name,
            snake_ident(&msg.name)
        ));
    }
    out.push_str("            Messages::Unknown => \"Unknown\",\n");
    out.push_str("        }\n");
    out.push_str("    }\n\n");

    out.push_str("    pub fn message_name_by_id(id: u32) -> &'static str {\n");
    for msg in &unique {
        let module = snake_ident(&msg.name);
        out.push_str(&format!("        if id == {module}::ID {{\n"));
        out.push_str(&format!("            return {module}::NAME;\n"));
        out.push_str("        }\n");
    }
    out.push_str("        \"Unknown\"\n");
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}
