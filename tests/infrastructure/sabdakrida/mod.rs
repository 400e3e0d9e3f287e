mod http_pronunciation_backend_test;
mod http_tutor_backend_test;
