/// JSON-RPC 2.0 bridge to the embedding frontend: measurement and feedback
/// notifications out, `set_mode` / `reset` commands in.
pub mod web_rpc;
