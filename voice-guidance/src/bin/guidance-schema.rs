use voice_guidance::app::guidance::GuidanceAppConfig;

/// writes the schema of the guidance configuration file to stdout
pub fn main() {
    let schema = schemars::schema_for!(GuidanceAppConfig);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
