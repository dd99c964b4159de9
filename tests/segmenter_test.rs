#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use zhtext_rs::dictionary_lib::Lexicon;
    use zhtext_rs::normalizer::normalize;
    use zhtext_rs::segmenter::{segment, segment_words};
    use zhtext_rs::{Analyzer, CutMode, Token};

    const PARAGRAPH: &str = "<h1>人工智能简介</h1>人工智能是计算机科学的一个分支，\
        它企图了解智能的实质，并生产出一种新的能以人类智能相似的方式做出反应的智能机器。\
        该领域的研究包括机器人、语言识别、图像识别、自然语言处理和专家系统等。\
        近年来，深度学习和机器学习推动了中华人民共和国的科技发展。";

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.word.as_str()).collect()
    }

    fn multiset(tokens: &[Token]) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for t in tokens {
            *counts.entry(t.word.as_str()).or_insert(0) += 1;
        }
        counts
    }

    fn small_lexicon() -> Lexicon {
        Lexicon::from_dict_str("人工 1000 n\n智能 1000 n\n人工智能 1 n\n研究 500 v\n")
    }

    #[test]
    fn precise_cut_scenario_test() {
        let analyzer = Analyzer::new();
        let text = normalize("我爱北京天安门，他爱上海东方明珠。");
        let tokens = analyzer.cut(&text);
        assert_eq!(
            words(&tokens),
            vec!["我", "爱", "北京", "天安门", "他", "爱", "上海", "东方明珠"]
        );
    }

    #[test]
    fn precise_cut_offsets_test() {
        let analyzer = Analyzer::new();
        let tokens = analyzer.cut("我爱北京 天安门");
        assert_eq!(
            tokens,
            vec![
                Token::new("我", 0),
                Token::new("爱", 3),
                Token::new("北京", 6),
                Token::new("天安门", 13),
            ]
        );
    }

    #[test]
    fn precise_cut_reconstructs_text_test() {
        let analyzer = Analyzer::new();
        let text = normalize(PARAGRAPH);
        let joined: String = analyzer.cut(&text).into_iter().map(|t| t.word).collect();
        assert_eq!(joined, text.replace(' ', ""));
    }

    #[test]
    fn precise_cut_is_deterministic_test() {
        let analyzer = Analyzer::new();
        let text = normalize(PARAGRAPH);
        assert_eq!(analyzer.cut(&text), analyzer.cut(&text));
    }

    #[test]
    fn cut_and_join_test() {
        let analyzer = Analyzer::new();
        assert_eq!(
            analyzer.cut_and_join("我来到北京清华大学", CutMode::Precise, "/ "),
            "我/ 来到/ 北京/ 清华大学"
        );
    }

    #[test]
    fn custom_words_are_kept_whole_test() {
        let analyzer = Analyzer::new();
        let tokens = analyzer.cut("我们研究自然语言处理和机器学习");
        assert_eq!(
            words(&tokens),
            vec!["我们", "研究", "自然语言处理", "和", "机器学习"]
        );

        let tokens = analyzer.cut("深度学习改变了人工智能领域");
        assert_eq!(
            words(&tokens),
            vec!["深度学习", "改变", "了", "人工智能", "领域"]
        );
    }

    #[test]
    fn dictionary_alone_splits_compound_test() {
        let lexicon = Lexicon::new();
        assert_eq!(
            segment_words("深度学习", &lexicon, CutMode::Precise),
            vec!["深度", "学习"]
        );
    }

    #[test]
    fn atomic_entry_overrides_heavier_split_test() {
        let mut lexicon = small_lexicon();
        assert_eq!(
            segment_words("研究人工智能", &lexicon, CutMode::Precise),
            vec!["研究", "人工", "智能"]
        );

        lexicon.add_atomic("人工智能");
        assert!(lexicon.is_atomic("人工智能"));
        assert_eq!(
            segment_words("研究人工智能", &lexicon, CutMode::Precise),
            vec!["研究", "人工智能"]
        );
        assert_eq!(
            segment_words("人工智能人工智能", &lexicon, CutMode::Precise),
            vec!["人工智能", "人工智能"]
        );
    }

    #[test]
    fn unknown_characters_become_single_tokens_test() {
        let lexicon = small_lexicon();
        assert_eq!(
            segment_words("甲乙人工", &lexicon, CutMode::Precise),
            vec!["甲", "乙", "人工"]
        );
        let empty = Lexicon::default();
        assert_eq!(segment_words("甲乙", &empty, CutMode::Precise), vec!["甲", "乙"]);
    }

    #[test]
    fn lexicon_skips_malformed_lines_test() {
        let lexicon = Lexicon::from_dict_str("北京 500 ns\n上海 lots ns\n天安门\n\n广州 0 ns\n");
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("北京"));
        assert!(!lexicon.contains("上海"));
        assert!(!lexicon.contains("天安门"));
        assert_eq!(lexicon.get("广州").map(|e| e.freq), Some(1));
        assert_eq!(lexicon.total_freq(), 501);
    }

    #[test]
    fn empty_input_yields_no_tokens_test() {
        let lexicon = small_lexicon();
        assert!(segment("", &lexicon, CutMode::Precise).is_empty());
        assert!(segment("   ", &lexicon, CutMode::Search).is_empty());
    }

    #[test]
    fn search_cut_adds_subwords_after_parent_test() {
        let analyzer = Analyzer::new();
        let tokens = analyzer.cut_for_search("中华人民共和国成立了");
        let words = words(&tokens);
        assert_eq!(words[0], "中华人民共和国");
        for sub in ["中华", "人民", "共和国"] {
            let pos = words.iter().position(|w| *w == sub).unwrap();
            assert!(pos > 0 && pos < words.iter().position(|w| *w == "成立").unwrap());
        }
        let sub = tokens.iter().find(|t| t.word == "人民").unwrap();
        assert_eq!(sub.offset, "中华".len());
    }

    #[test]
    fn search_cut_is_superset_of_precise_test() {
        let analyzer = Analyzer::new();
        let text = normalize(PARAGRAPH);
        let precise = analyzer.cut(&text);
        let search = analyzer.cut_for_search(&text);
        assert!(search.len() >= precise.len());

        let search_counts = multiset(&search);
        for (word, count) in multiset(&precise) {
            assert!(search_counts.get(word).copied().unwrap_or(0) >= count, "{word}");
        }
    }

    #[test]
    fn search_cut_two_char_words_unchanged_test() {
        let analyzer = Analyzer::new();
        let text = "北京上海";
        assert_eq!(analyzer.cut(text), analyzer.cut_for_search(text));
    }

    #[test]
    fn cut_mode_parse_test() {
        assert_eq!(CutMode::try_from("Search"), Ok(CutMode::Search));
        assert_eq!(CutMode::try_from("default"), Ok(CutMode::Precise));
        assert!(CutMode::try_from("hmm").is_err());
        assert_eq!(CutMode::default().to_string(), "precise");
    }
}
