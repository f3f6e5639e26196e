mod tests_descriptor;
