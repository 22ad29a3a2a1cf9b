mod block_handler;

pub(crate) use block_handler::BlockHandler;
