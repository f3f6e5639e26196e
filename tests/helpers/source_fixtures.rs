//! Sample wq programs used across tests.

/// Exercises every construct of the grammar
pub const KITCHEN_SINK: &str = r#"// every construct at least once
fib: {[n]
  $[n < 2; @r n; 0]
  a: 0; b: 1
  N[n - 1; t: a + b; a: b; b: t]
  b
}

xs: (1; 2; 3)
xs[0]: 10
total: 0
i: 0
W[i < #xs; total: total + xs[i]; i: i + 1]
$.[total > 10; @a total == 15]
point: (`x: 1.5; `y: -2.0)
words: ,"a","b"
m: ((1; 2)
  (3; 4))
m[1][0]
f: {@b}
g: {[x] @c}
none: ()
one: (1;)
ok: true != false
fib[10;] % 7
"#;

/// A loop with a multi-line body
pub const COUNTDOWN: &str = "n: 3
W[n > 0; n: n - 1
  log[n;]]
";
