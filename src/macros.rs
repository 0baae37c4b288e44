#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Anchored regex terminal. Patterns must start with `^`.
#[macro_export]
macro_rules! re {
    ($pat:literal) => {
        $crate::Expr::Pattern($crate::regex!($pat))
    };
}

#[macro_export]
macro_rules! lit {
    ($text:expr) => {
        $crate::Expr::Literal($text)
    };
}

#[macro_export]
macro_rules! class {
    ($pred:expr) => {
        $crate::Expr::CharClass($pred)
    };
}

/// Reference to another named rule, resolved when the grammar is compiled.
#[macro_export]
macro_rules! call {
    ($name:literal) => {
        $crate::Expr::RuleRef($name)
    };
}

#[macro_export]
macro_rules! seq {
    ($($item:expr),+ $(,)?) => {
        $crate::Expr::Sequence(vec![ $($item),+ ])
    };
}

#[macro_export]
macro_rules! choice {
    ($($alt:expr),+ $(,)?) => {
        $crate::Expr::OrderedChoice(vec![ $($alt),+ ])
    };
}

#[macro_export]
macro_rules! opt {
    ($inner:expr) => {
        $crate::Expr::Optional(Box::new($inner))
    };
}

#[macro_export]
macro_rules! many {
    ($inner:expr) => {
        $crate::Expr::ZeroOrMore(Box::new($inner))
    };
}

#[macro_export]
macro_rules! not {
    ($inner:expr) => {
        $crate::Expr::NegativeLookahead(Box::new($inner))
    };
}

#[macro_export]
macro_rules! rule {
    (@action) => {
        $crate::Action::PassThrough
    };
    (@action $action:ident) => {
        $crate::Action::$action
    };
    (
        name: $name:expr,
        body: $body:expr
        $(, action: $action:ident)?
        $(,)?
    ) => {{
        $crate::Rule { name: $name, body: $body, action: $crate::rule!(@action $($action)?) }
    }};
}
