use crate::generator::{join_lines, Step, ADMINISTRATORS_SID, TAKEOWN_DEFAULT_ANSWER};

/// Explorer starts the `runas` verb elevated through UAC. `HasLUAShield` on its
/// own only draws the shield icon.
pub const VERB_KEY: &str = "runas";
pub const VERB_LABEL: &str = "Force Delete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    File,
    Directory,
}

impl Target {
    fn root_key(&self) -> &'static str {
        match self {
            Target::File => r"HKEY_CLASSES_ROOT\*\shell",
            Target::Directory => r"HKEY_CLASSES_ROOT\Directory\shell",
        }
    }

    fn step_command(&self, step: Step) -> String {
        match (self, step) {
            (Target::File, Step::TakeOwnership) => "takeown /f \"%1\"".to_string(),
            (Target::Directory, Step::TakeOwnership) => format!(
                "takeown /f \"%1\" /r /d {}",
                TAKEOWN_DEFAULT_ANSWER.to_lowercase()
            ),
            (Target::File, Step::GrantPermissions) => {
                format!("icacls \"%1\" /grant {}:F /c /q", ADMINISTRATORS_SID)
            }
            (Target::Directory, Step::GrantPermissions) => {
                format!("icacls \"%1\" /grant {}:F /t /c /q", ADMINISTRATORS_SID)
            }
            (Target::File, Step::Remove) => "del /f /q /a \"%1\"".to_string(),
            (Target::Directory, Step::Remove) => "rd /s /q \"%1\"".to_string(),
        }
    }

    /// Command line run by Explorer; `%1` is the right-clicked item.
    fn command_line(&self) -> String {
        let steps: Vec<String> = Step::ORDERED
            .iter()
            .map(|step| self.step_command(*step))
            .collect();
        format!("cmd.exe /c {}", steps.join(" && "))
    }
}

/// Escapes a value for a `"..."` string in a `.reg` file.
pub fn escape_reg_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str(r"\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// The path only appears in a `;` comment; line breaks would end the comment.
fn comment_safe(path: &str) -> String {
    path.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn verb_section(target: Target) -> Vec<String> {
    let verb_key = format!("{}\\{}", target.root_key(), VERB_KEY);
    let command = escape_reg_string(&target.command_line());
    vec![
        format!("[{}]", verb_key),
        format!("@=\"{}\"", escape_reg_string(VERB_LABEL)),
        "\"HasLUAShield\"=\"\"".to_string(),
        "\"NoWorkingDirectory\"=\"\"".to_string(),
        String::new(),
        format!("[{}\\command]", verb_key),
        format!("@=\"{}\"", command),
        // Used instead of the default value when the verb runs elevated
        format!("\"IsolatedCommand\"=\"{}\"", command),
    ]
}

pub fn render(path: &str) -> String {
    let mut lines = vec![
        "Windows Registry Editor Version 5.00".to_string(),
        String::new(),
        format!(
            "; \"{}\" context-menu entry, generated alongside the ForceDelete script for: {}",
            VERB_LABEL,
            comment_safe(path)
        ),
        "; Import with regedit, then right-click any file or folder and choose \"Force Delete\"."
            .to_string(),
        String::new(),
    ];

    lines.extend(verb_section(Target::File));
    lines.push(String::new());
    lines.extend(verb_section(Target::Directory));

    join_lines(lines)
}
