mod comments;
mod common;
mod feedback;
mod service;
