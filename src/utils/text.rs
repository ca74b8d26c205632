/// Folds a free-text place name into a comparison key: Portuguese diacritics
/// are stripped, letters lowercased and all whitespace removed.
///
/// `"São  João"` and `"sao joao"` both become `"saojoao"`.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn strips_accents_case_and_spaces() {
        assert_eq!(normalize("São João"), "saojoao");
        assert_eq!(normalize("  CENTRO "), "centro");
        assert_eq!(normalize("Jardim Paulistânia"), "jardimpaulistania");
        assert_eq!(normalize("Conceição"), "conceicao");
    }

    #[test]
    fn both_sides_fold_to_the_same_key() {
        assert_eq!(normalize("vila  ÁGUA   verde"), normalize("Vila Agua Verde"));
        assert_ne!(normalize("Vila Nova"), normalize("Vila Velha"));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize("   "), "");
    }
}
