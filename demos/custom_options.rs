//! Customizing EDN output with PrintOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_edn_pretty::color::{ColorScheme, Element};
use serde_edn_pretty::{
    config, render, render_with_options, to_string_with_options, Kind, PrintOptions, Tagged,
    Value,
};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    ports: Vec<u16>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let app = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
        ports: vec![8080, 8443],
    };

    // Default width and delimiter.
    let options = PrintOptions::new();
    println!("Default:\n{}\n", to_string_with_options(&app, &options)?);

    // Narrow output with commas between map entries.
    let options = PrintOptions::new().with_width(24).with_map_delimiter(",");
    println!("Narrow, commas:\n{}\n", to_string_with_options(&app, &options)?);

    // Strict mode refuses anything an EDN reader could not read back.
    let strict = PrintOptions::new().with_strict_mode(true);
    match to_string_with_options(&app, &strict) {
        Ok(text) => println!("Strict:\n{}\n", text),
        Err(err) => println!("Strict mode error: {}\n", err),
    }

    // A tag reader turns records into tagged literals, which strict mode accepts.
    let strict = strict.with_tag_reader(|value| match value {
        Value::Record(record) => Some(Tagged::new(
            format!("app/{}", record.type_name.to_lowercase()),
            Value::Map(record.fields.clone()),
        )),
        _ => None,
    });
    println!("Strict, tagged:\n{}\n", to_string_with_options(&app, &strict)?);

    // Handlers replace the rendering of a whole kind.
    let options = PrintOptions::new().with_handler(Kind::Bool, |c, value| {
        let text = if value.as_bool() == Some(true) { "yes" } else { "no" };
        Ok(c.styled(Element::Boolean, text))
    });
    println!("Custom booleans:\n{}\n", to_string_with_options(&app, &options)?);

    // Colors, with keywords underlined instead of the default bold yellow.
    let updates = ColorScheme::parse_updates("keyword=underline,green")?;
    let options = PrintOptions::colored().with_color_updates(&updates);
    println!("Colored:\n{}\n", to_string_with_options(&app, &options)?);

    // Process-wide defaults, scoped to a closure.
    let value = Value::vector([Value::from(1), Value::opaque("Socket", "127.0.0.1:80")]);
    let lenient = render(&value)?;
    let strict = config::with_strict_mode(true, || render(&value));
    println!("Lenient: {}", lenient);
    println!("Scoped strict: {:?}", strict);

    let wide = render_with_options(&value, &PrintOptions::new().with_width(200))?;
    println!("Wide: {}", wide);

    Ok(())
}
