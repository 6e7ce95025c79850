use crate::parsing::inline::types::SpanKind;

/// A paired inline delimiter and the span kind the text between a pair becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub token: &'static str,
    pub kind: SpanKind,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        token: "**",
        kind: SpanKind::Bold,
    };
    pub const ITALIC: Delimiter = Delimiter {
        token: "*",
        kind: SpanKind::Italic,
    };
    pub const CODE: Delimiter = Delimiter {
        token: "`",
        kind: SpanKind::Code,
    };

    /// Application order. Bold must run before italic so `**` is gone by the
    /// time `*` is split on; code runs last and never sees styled text.
    pub const PRECEDENCE: [Delimiter; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];
}
