/// The destructive step only runs on a single `y`, in any case, surrounded by
/// optional whitespace.
pub fn is_confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
