mod helpers;
mod items_test;
