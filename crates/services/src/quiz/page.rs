use std::fmt;

/// Which screen the quiz is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Top,
    Quiz,
    Result,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Top => "top",
            Page::Quiz => "quiz",
            Page::Result => "result",
        };
        f.write_str(name)
    }
}
