pub mod item;

#[cfg(test)]
mod test;
