use finlogix_store::StoreError;

pub fn render_error(error: &StoreError) -> String {
    let mut lines = vec![
        format!("The command could not be completed ({}).", error.code),
        String::new(),
        format!("  {}", error.message),
        String::new(),
        "How to fix it:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}
