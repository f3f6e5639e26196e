mod tests_control_flow;
mod tests_errors;
mod tests_expressions;
mod tests_lists;
mod tests_lossless;
