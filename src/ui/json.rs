use std::io::{self, Write};

use serde_json::{Map, Value};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

/// Write an event to stdout.
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// `{"event": name, "command": command}` merged with the fields of `data`
pub fn event(name: &str, command: &str, data: Value) -> Value {
    let mut object = Map::new();
    object.insert("event".to_string(), Value::from(name));
    object.insert("command".to_string(), Value::from(command));
    if let Value::Object(fields) = data {
        object.extend(fields);
    }
    Value::Object(object)
}
