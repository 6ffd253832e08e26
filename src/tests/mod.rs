mod formatter;
mod records;
mod restricted;
mod support;
