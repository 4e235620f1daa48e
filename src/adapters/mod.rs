pub mod battlenet;
pub mod discord;

#[cfg(test)]
mod test_server;
