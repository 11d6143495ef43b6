use std::fmt;

/// The single line handed back to the calling shell for evaluation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ShellCommand {
    Export { var: String, value: String },
    Unset { var: String },
    Echo(String),
}

impl ShellCommand {
    pub fn export(var: &str, value: &str) -> Self {
        Self::Export {
            var: var.to_string(),
            value: value.to_string(),
        }
    }

    pub fn unset(var: &str) -> Self {
        Self::Unset {
            var: var.to_string(),
        }
    }

    pub fn echo(message: impl Into<String>) -> Self {
        Self::Echo(message.into())
    }

    pub fn error(message: impl fmt::Display) -> Self {
        Self::Echo(format!("Error - {message}"))
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Export { var, value } => write!(f, "export {var}={}", double_quote(value)),
            Self::Unset { var } => write!(f, "unset {var}"),
            Self::Echo(message) => write!(f, "echo {}", single_quote(message)),
        }
    }
}

fn double_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// POSIX single quoting; newlines are flattened to spaces.
pub fn single_quote(value: &str) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    format!("'{}'", flattened.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_export() {
        let command = ShellCommand::export("AWS_PROFILE", "es_legacy");
        assert_eq!(command.to_string(), r#"export AWS_PROFILE="es_legacy""#);
    }

    #[test]
    fn escapes_export_value() {
        let command = ShellCommand::export("AWS_PROFILE", "a\"$b`c");
        assert_eq!(command.to_string(), r#"export AWS_PROFILE="a\"\$b\`c""#);
    }

    #[test]
    fn renders_unset() {
        assert_eq!(ShellCommand::unset("AWS_PROFILE").to_string(), "unset AWS_PROFILE");
    }

    #[test]
    fn quotes_echo_message() {
        let command = ShellCommand::error("can't match\nanything");
        assert_eq!(command.to_string(), r"echo 'Error - can'\''t match anything'");
    }
}
