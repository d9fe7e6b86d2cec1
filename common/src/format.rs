//! 表示用テキスト整形

/// "diagnosis_mismatch" -> "Diagnosis Mismatch"
///
/// アンダースコアを空白に置き換え、各単語の先頭を大文字化する。
pub fn title_case_type(kind: &str) -> String {
    kind.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 文字数カウンタ用の3桁区切り
pub fn group_thousands(count: usize) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// 数値表示: 整数なら小数点なし、それ以外は小数1桁
///
/// サーバは confidence/score を小数1桁で丸めて返す。
pub fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}
