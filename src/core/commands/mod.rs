/// Commands the shell handles itself instead of looking them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
}

impl Builtin {
    pub const EXIT: &'static str = "exit";

    /// Matches the bare name only; `/bin/exit` is an ordinary program.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            Self::EXIT => Some(Builtin::Exit),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Exit => Self::EXIT,
        }
    }
}
