//! Cross-module integration tests: session store through guard and menu.

mod helpers;

mod guard_test;
mod menu_test;
mod session_test;
