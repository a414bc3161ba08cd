#[cfg(test)]
mod common;



#[cfg(test)]
mod session_update_tests;

#[cfg(test)]
mod guard_tests;
