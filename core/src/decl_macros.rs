// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// XMARK: Clever Rust, use of decl macro w/ `tt` to allow any number of arguments.

/// Format arguments straight into a [`crate::InlineString`] w/out creating an
/// intermediate [String]. Takes whatever you would pass to [format!].
///
/// # Example
///
/// ```
/// use colorconv_core::inline_string;
/// let it = inline_string!("#{:02X}{:02X}{:02X}", 100, 149, 237);
/// assert_eq!(it, "#6495ED");
/// ```
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        // Writing to a SmallString can't fail.
        _ = write!(&mut acc, $($format)*);
        acc
    }};
}

/// This macro joins a collection of items into a [`crate::InlineString`] with a specified
/// delimiter and format.
///
/// # Arguments
///
/// * `from: $collection` - The collection to iterate over.
/// * `each: $item` - The identifier for each item in the collection.
/// * `delim: $delim` - The delimiter to insert between items.
/// * `format: $($format:tt)*` - The format to apply to each item.
///
/// # Example
///
/// ```
/// use colorconv_core::join;
/// let channels = [100_u8, 149, 237];
/// let result = join!(from: channels, each: it, delim: ", ", format: "{it}");
/// assert_eq!(result, "100, 149, 237");
/// ```
#[macro_export]
macro_rules! join {
    (
        from: $collection:expr,
        each: $item:ident,
        delim: $delim:expr,
        format: $($format:tt)*
    ) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        let collection = &$collection;
        let mut iter = collection.iter();
        // First item.
        if let Some($item) = iter.next() {
            _ = write!(&mut acc, $($format)*);
        }
        // Rest of the items.
        for $item in iter {
            _ = write!(&mut acc, "{}", $delim);
            _ = write!(&mut acc, $($format)*);
        }
        acc
    }};
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
