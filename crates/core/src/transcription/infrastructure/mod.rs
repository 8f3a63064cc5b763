pub mod http_transcribe_client;
