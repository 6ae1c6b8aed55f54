use crate::generator::{
    join_lines, trim_trailing_separators, Step, ADMINISTRATORS_SID, TAKEOWN_DEFAULT_ANSWER,
};

/// Escapes a value for the body of `set "TARGET=<value>"` in a batch file.
///
/// The line is parsed with delayed expansion disabled, so `!` is literal.
/// `%` is doubled to survive percent expansion. Text between quote marks is
/// literal, but a `"` inside the value flips cmd's quote state; characters that
/// end up outside a quoted region are caret-escaped. `set` keeps everything up
/// to the last quote on the line, so embedded quotes stay in the value.
///
/// Control characters cannot appear in Windows file names and would break the
/// line structure, so they are dropped.
pub fn escape_set_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 8);
    let mut quoted = true;

    for ch in value.chars() {
        match ch {
            c if c.is_control() => {}
            '%' => escaped.push_str("%%"),
            '"' => {
                quoted = !quoted;
                escaped.push('"');
            }
            '^' | '&' | '|' | '<' | '>' | '(' | ')' if !quoted => {
                escaped.push('^');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }

    escaped
}

fn step_block(number: usize, step: Step) -> Vec<String> {
    let mut block = vec![format!("rem Step {}: {}", number, step.description())];
    block.extend(match step {
        Step::TakeOwnership => vec![
            "echo Taking ownership of \"!TARGET!\"".to_string(),
            "if \"!IS_DIR!\"==\"1\" (".to_string(),
            format!(
                "    takeown /F \"!TARGET!\" /R /D {} >nul",
                TAKEOWN_DEFAULT_ANSWER
            ),
            ") else (".to_string(),
            "    takeown /F \"!TARGET!\" >nul".to_string(),
            ")".to_string(),
        ],
        Step::GrantPermissions => vec![
            "echo Granting full control on \"!TARGET!\"".to_string(),
            "if \"!IS_DIR!\"==\"1\" (".to_string(),
            format!(
                "    icacls \"!TARGET!\" /grant {}:F /T /C /Q >nul",
                ADMINISTRATORS_SID
            ),
            ") else (".to_string(),
            format!(
                "    icacls \"!TARGET!\" /grant {}:F /C /Q >nul",
                ADMINISTRATORS_SID
            ),
            ")".to_string(),
        ],
        Step::Remove => vec![
            "echo Deleting \"!TARGET!\"".to_string(),
            "if \"!IS_DIR!\"==\"1\" (".to_string(),
            "    rd /S /Q \"!TARGET!\"".to_string(),
            ") else (".to_string(),
            "    del /F /Q /A \"!TARGET!\"".to_string(),
            ")".to_string(),
        ],
    });
    block
}

pub fn render(path: &str) -> String {
    let mut lines = vec![
        "@echo off".to_string(),
        "rem ForceDelete.bat - take ownership of a locked file or folder and delete it.".to_string(),
        "rem Run from an elevated Command Prompt.".to_string(),
        "chcp 65001 >nul".to_string(),
        "setlocal DisableDelayedExpansion".to_string(),
        format!("set \"TARGET={}\"", escape_set_value(trim_trailing_separators(path))),
        "setlocal EnableDelayedExpansion".to_string(),
        String::new(),
        "net session >nul 2>&1".to_string(),
        "if errorlevel 1 (".to_string(),
        "    echo Administrator rights are required. Re-run this script as Administrator.".to_string(),
        "    exit /b 1".to_string(),
        ")".to_string(),
        String::new(),
        "if not exist \"!TARGET!\" (".to_string(),
        "    echo Path not found: \"!TARGET!\"".to_string(),
        "    exit /b 1".to_string(),
        ")".to_string(),
        String::new(),
        "set \"IS_DIR=0\"".to_string(),
        "if exist \"!TARGET!\\*\" set \"IS_DIR=1\"".to_string(),
    ];

    for (index, step) in Step::ORDERED.into_iter().enumerate() {
        lines.push(String::new());
        lines.extend(step_block(index + 1, step));
    }

    lines.push(String::new());
    lines.push("echo Done.".to_string());
    lines.push("endlocal".to_string());
    lines.push("endlocal".to_string());

    join_lines(lines)
}
