mod on_command_async;

pub use on_command_async::OnCommandAsync;
