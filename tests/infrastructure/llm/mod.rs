mod chat_completions_client_test;
