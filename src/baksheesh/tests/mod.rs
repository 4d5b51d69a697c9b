mod test_context;
