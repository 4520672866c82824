mod test_walker;
