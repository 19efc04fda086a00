mod collection;
mod document;
