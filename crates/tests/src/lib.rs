#[cfg(test)]
mod common;


#[cfg(test)]
mod auto_expand_tests;

#[cfg(test)]
mod permission_guard_tests;

#[cfg(test)]
mod api_client_tests;
