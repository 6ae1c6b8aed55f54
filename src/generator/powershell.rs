use crate::generator::{
    join_lines, trim_trailing_separators, Step, ADMINISTRATORS_SID, TAKEOWN_DEFAULT_ANSWER,
};

/// Renders a single-quoted PowerShell string literal.
///
/// Inside single quotes PowerShell expands nothing; the only special
/// characters are the quote marks themselves, which are escaped by doubling.
/// PowerShell also treats the typographic quotes U+2018..U+201B as single
/// quotes, so those are doubled as well.
pub fn quote_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if is_single_quote(ch) {
            quoted.push(ch);
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

fn is_single_quote(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}')
}

fn step_block(number: usize, step: Step) -> Vec<String> {
    let mut block = vec![format!("# Step {}: {}", number, step.description())];
    block.extend(match step {
        Step::TakeOwnership => vec![
            "Write-Host \"Taking ownership of $Target\"".to_string(),
            "if ($isDirectory) {".to_string(),
            format!(
                "    & takeown.exe /F $Target /R /D {} | Out-Null",
                TAKEOWN_DEFAULT_ANSWER
            ),
            "} else {".to_string(),
            "    & takeown.exe /F $Target | Out-Null".to_string(),
            "}".to_string(),
        ],
        Step::GrantPermissions => vec![
            "Write-Host \"Granting full control on $Target\"".to_string(),
            "if ($isDirectory) {".to_string(),
            format!(
                "    & icacls.exe $Target /grant '{}:F' /T /C /Q | Out-Null",
                ADMINISTRATORS_SID
            ),
            "} else {".to_string(),
            format!(
                "    & icacls.exe $Target /grant '{}:F' /C /Q | Out-Null",
                ADMINISTRATORS_SID
            ),
            "}".to_string(),
        ],
        Step::Remove => vec![
            "Write-Host \"Deleting $Target\"".to_string(),
            "Remove-Item -LiteralPath $Target -Recurse -Force".to_string(),
        ],
    });
    block
}

pub fn render(path: &str) -> String {
    let mut lines = vec![
        "# ForceDelete.ps1 - take ownership of a locked file or folder and delete it.".to_string(),
        "# Run from an elevated PowerShell prompt.".to_string(),
        "$ErrorActionPreference = 'Stop'".to_string(),
        String::new(),
        format!("$Target = {}", quote_literal(trim_trailing_separators(path))),
        String::new(),
        "$identity = [Security.Principal.WindowsIdentity]::GetCurrent()".to_string(),
        "$principal = New-Object Security.Principal.WindowsPrincipal($identity)".to_string(),
        "if (-not $principal.IsInRole([Security.Principal.WindowsBuiltInRole]::Administrator)) {"
            .to_string(),
        "    Write-Warning 'Administrator rights are required. Re-run this script as Administrator.'"
            .to_string(),
        "    exit 1".to_string(),
        "}".to_string(),
        String::new(),
        "if (-not (Test-Path -LiteralPath $Target)) {".to_string(),
        "    Write-Warning \"Path not found: $Target\"".to_string(),
        "    exit 1".to_string(),
        "}".to_string(),
        String::new(),
        "$isDirectory = Test-Path -LiteralPath $Target -PathType Container".to_string(),
    ];

    for (index, step) in Step::ORDERED.into_iter().enumerate() {
        lines.push(String::new());
        lines.extend(step_block(index + 1, step));
    }

    lines.push(String::new());
    lines.push("Write-Host 'Done.'".to_string());

    join_lines(lines)
}
