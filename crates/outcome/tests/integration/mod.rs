mod async_chain;
