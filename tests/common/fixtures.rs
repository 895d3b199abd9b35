//! Static value corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of values that must all be
//! detected as the same type.

/// Calendar-valid dates in both accepted layouts.
pub const CORPUS_DATES: &[&str] = &[
    "27.05.2025",
    "01.01.1970",
    "29.02.2024",
    "31.12.9999",
    "2025-05-27",
    "2000-02-29",
    "0001-01-01",
];

/// Date-shaped values that do not name a real day, or are near-misses on
/// layout. None of these are dates.
pub const CORPUS_NOT_DATES: &[&str] = &[
    "32.01.2025",
    "01.13.2025",
    "29.02.2023",
    "2025-13-01",
    "2025-02-30",
    "27.5.2025",
    "2025/05/27",
    "27-05-2025",
    "2025-05-27T10:00:00",
];

/// Phones in the one accepted layout.
pub const CORPUS_PHONES: &[&str] = &["+7 903 123 45 78", "+7 999 888 77 66", "+7 000 000 00 00"];

/// One-character deviations from a valid phone.
pub const CORPUS_NEAR_PHONES: &[&str] = &[
    "+79031234578",
    "+7 9031234578",
    "+7 903 123 4578",
    "+7 903 123 45 7",
    "+7 903 123 45 789",
    "+1 903 123 45 78",
    "8 903 123 45 78",
    "+7 903-123-45-78",
];

pub const CORPUS_EMAILS: &[&str] = &[
    "vasya@pukin.ru",
    "test@example.com",
    "first.last@sub.example.org",
    "user+tag@mail.co",
    "a_b%c-d@x-y.io",
];

pub const CORPUS_NOT_EMAILS: &[&str] = &[
    "vasya@pukin",
    "vasya@pukin.r",
    ".vasya@pukin.ru",
    "vasya.@pukin.ru",
    "va..sya@pukin.ru",
    "vasya@pukin..ru",
    "vasya pukin@mail.ru",
    "@pukin.ru",
];

/// Free text, including non-ASCII.
pub const CORPUS_TEXT: &[&str] = &[
    "",
    "John",
    "123",
    "Вася Пупкин",
    "заказ №42",
    "hello, world",
    "   ",
];
