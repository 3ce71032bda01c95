
mod test_loader;
