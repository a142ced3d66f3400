// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
///
/// Every canonical hex (`#6495ED`), RGB (`255, 255, 255`), and HSL (`360, 100%, 100%`)
/// string fits w/out spilling.
///
/// [`smallvec::SmallVec::spilled`]: https://docs.rs/smallvec/latest/smallvec/struct.SmallVec.html#method.spilled
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;

/// Tokens borrowed from the input, eg: the components of an RGB or HSL triple.
pub type InlineVecStr<'a> = InlineVec<&'a str>;
