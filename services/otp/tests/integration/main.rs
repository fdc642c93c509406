mod http_test;
mod otp_test;
mod telegram_test;
