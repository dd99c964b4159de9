#[cfg(test)]
mod tests {
    use zhtext_rs::dictionary_lib::IdfTable;
    use zhtext_rs::keywords::{
        format_frequencies, format_keywords, parse_keyword_line, CoOccurrenceGraph, Keyword,
        KeywordFilter, TextRank, TfIdf,
    };
    use zhtext_rs::stopwords::StopwordSet;
    use zhtext_rs::{Analyzer, KeywordMethod, Token};

    const ARTICLE: &str = "人工智能是计算机科学的一个分支，它企图了解智能的实质，\
        并生产出一种新的能以人类智能相似的方式做出反应的智能机器。\
        人工智能的研究包括机器人、语言识别、图像识别、自然语言处理和专家系统。\
        机器学习是人工智能的核心，深度学习是机器学习的重要方法，\
        自然语言处理与机器学习和深度学习密切相关。";

    fn tokens(words: &[&str]) -> Vec<Token> {
        let mut offset = 0;
        words
            .iter()
            .map(|w| {
                let token = Token::new(*w, offset);
                offset += w.len();
                token
            })
            .collect()
    }

    fn keyword_words(keywords: &[Keyword]) -> Vec<&str> {
        keywords.iter().map(|k| k.keyword.as_str()).collect()
    }

    #[test]
    fn idf_table_default_is_median_test() {
        let table = IdfTable::from_idf_str("北京 5.0\n天安门 10.0\n长城 8.0\n");
        assert_eq!(table.len(), 3);
        assert_eq!(table.default_idf(), 8.0);
        assert_eq!(table.idf("上海"), 8.0);
        assert_eq!(table.idf("北京"), 5.0);
        assert_eq!(table.with_default_idf(1.5).idf("上海"), 1.5);
    }

    #[test]
    fn tfidf_weights_and_tie_order_test() {
        let idf = IdfTable::from_idf_str("北京 5.0\n天安门 10.0\n长城 8.0\n");
        let stopwords = StopwordSet::from_list(&["的"]);
        let scorer = TfIdf::new(&idf, KeywordFilter::new(&stopwords));

        let doc = tokens(&["北京", "的", "天安门", "爱", "北京", "上海"]);
        let keywords = scorer.score(&doc, 10);

        // 4 candidates: 北京 x2, 天安门, 上海 (single-char 爱 and stopword 的 excluded)
        assert_eq!(keyword_words(&keywords), vec!["北京", "天安门", "上海"]);
        assert_eq!(keywords[0].weight, 2.5);
        assert_eq!(keywords[1].weight, 2.5);
        assert_eq!(keywords[2].weight, 2.0);

        let top2 = scorer.score(&doc, 2);
        assert_eq!(keyword_words(&top2), vec!["北京", "天安门"]);
    }

    #[test]
    fn tfidf_empty_document_test() {
        let idf = IdfTable::from_idf_str("北京 5.0\n");
        let stopwords = StopwordSet::empty();
        let scorer = TfIdf::new(&idf, KeywordFilter::new(&stopwords));
        assert!(scorer.score(&[], 10).is_empty());
        assert!(scorer.score(&tokens(&["我", "爱"]), 10).is_empty());
    }

    #[test]
    fn keyword_filter_min_chars_test() {
        let stopwords = StopwordSet::from_list(&["我们"]);
        let filter = KeywordFilter::new(&stopwords);
        assert!(!filter.is_candidate("爱"));
        assert!(!filter.is_candidate("我们"));
        assert!(filter.is_candidate("北京"));
        assert!(filter.with_min_word_chars(1).is_candidate("爱"));
    }

    #[test]
    fn graph_counts_window_pairs_test() {
        let graph = CoOccurrenceGraph::build(&["北京", "上海", "北京"], 5);
        let beijing = graph.node_id("北京").unwrap();
        let shanghai = graph.node_id("上海").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(beijing, shanghai), 2.0);
        assert_eq!(graph.edge_weight(beijing, beijing), 0.0);
        assert_eq!(graph.degree_weight(shanghai), 2.0);
    }

    #[test]
    fn graph_window_limits_pairs_test() {
        let graph = CoOccurrenceGraph::build(&["北京", "上海", "广州"], 2);
        let id = |w| graph.node_id(w).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(id("北京"), id("上海")), 1.0);
        assert_eq!(graph.edge_weight(id("上海"), id("广州")), 1.0);
        assert_eq!(graph.edge_weight(id("北京"), id("广州")), 0.0);

        let wide = CoOccurrenceGraph::build(&["北京", "上海", "广州"], 3);
        assert_eq!(wide.edge_count(), 3);
    }

    #[test]
    fn textrank_star_graph_test() {
        let stopwords = StopwordSet::empty();
        let textrank = TextRank::new(KeywordFilter::new(&stopwords)).with_window_size(2);
        let doc = tokens(&["北京", "上海", "北京", "广州", "北京", "深圳"]);

        let keywords = textrank.score(&doc, 10);
        assert_eq!(keyword_words(&keywords), vec!["北京", "上海", "广州", "深圳"]);
        assert!(keywords[0].weight > keywords[1].weight);
        // 上海 and 广州 each co-occur twice with 北京, 深圳 only once
        assert_eq!(keywords[1].weight, keywords[2].weight);
        assert!(keywords[2].weight > keywords[3].weight);

        let graph = textrank.build_graph(&doc);
        let outcome = textrank.rank(&graph);
        assert!(outcome.converged);
        assert!(outcome.iterations <= TextRank::DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn textrank_isolated_nodes_test() {
        let stopwords = StopwordSet::empty();
        let textrank = TextRank::new(KeywordFilter::new(&stopwords)).with_window_size(1);
        let doc = tokens(&["北京", "上海", "北京"]);

        let keywords = textrank.score(&doc, 10);
        assert_eq!(keyword_words(&keywords), vec!["北京", "上海"]);
        for k in &keywords {
            assert!((k.weight - (1.0 - TextRank::DEFAULT_DAMPING)).abs() < 1e-12);
        }
    }

    #[test]
    fn textrank_window_counts_non_candidate_positions_test() {
        let stopwords = StopwordSet::empty();
        let doc = tokens(&["北京", "爱", "我", "他", "爱", "上海"]);

        let graph = TextRank::new(KeywordFilter::new(&stopwords)).build_graph(&doc);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.node_id("爱").is_none());

        let wide = TextRank::new(KeywordFilter::new(&stopwords))
            .with_window_size(6)
            .build_graph(&doc);
        let beijing = wide.node_id("北京").unwrap();
        let shanghai = wide.node_id("上海").unwrap();
        assert_eq!(wide.edge_weight(beijing, shanghai), 1.0);
    }

    #[test]
    fn graph_build_with_skips_rejected_endpoints_test() {
        let words = ["北京", "爱", "上海", "爱"];
        let graph = CoOccurrenceGraph::build_with(&words, 3, |w| w.chars().count() >= 2);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_id("北京"), Some(0));
        assert_eq!(graph.node_id("上海"), Some(1));
    }

    #[test]
    fn textrank_isolated_node_ranks_last_test() {
        let stopwords = StopwordSet::empty();
        let textrank = TextRank::new(KeywordFilter::new(&stopwords)).with_window_size(2);
        // 广州 sits past the window of every other candidate
        let doc = tokens(&["北京", "上海", "爱", "爱", "爱", "广州"]);

        let keywords = textrank.score(&doc, 10);
        assert_eq!(keyword_words(&keywords), vec!["北京", "上海", "广州"]);
        let floor = 1.0 - TextRank::DEFAULT_DAMPING;
        assert!((keywords[2].weight - floor).abs() < 1e-12);
        assert!(keywords[0].weight > keywords[2].weight);
        assert!(keywords[1].weight > keywords[2].weight);

        let graph = textrank.build_graph(&doc);
        assert!(graph.is_isolated(graph.node_id("广州").unwrap()));
        assert!(!graph.is_isolated(graph.node_id("北京").unwrap()));
    }

    #[test]
    fn keyword_method_parse_and_display_test() {
        assert_eq!(KeywordMethod::try_from("TF-IDF"), Ok(KeywordMethod::TfIdf));
        assert_eq!(KeywordMethod::try_from("textrank"), Ok(KeywordMethod::TextRank));
        assert!(KeywordMethod::try_from("bm25").is_err());
        assert_eq!(KeywordMethod::TextRank.to_string(), "textrank");
    }

    #[test]
    fn textrank_respects_iteration_cap_test() {
        let stopwords = StopwordSet::empty();
        let textrank = TextRank::new(KeywordFilter::new(&stopwords))
            .with_max_iterations(2)
            .with_epsilon(0.0);
        let doc = tokens(&["北京", "上海", "北京", "广州", "深圳", "上海", "杭州"]);
        let outcome = textrank.rank(&textrank.build_graph(&doc));
        assert_eq!(outcome.iterations, 2);
        assert!(!outcome.converged);
    }

    #[test]
    fn textrank_empty_document_test() {
        let stopwords = StopwordSet::empty();
        let textrank = TextRank::new(KeywordFilter::new(&stopwords));
        assert!(textrank.score(&[], 5).is_empty());
    }

    #[test]
    fn analyzer_keywords_bounded_and_sorted_test() {
        let analyzer = Analyzer::new();
        for method in [KeywordMethod::TfIdf, KeywordMethod::TextRank] {
            for top_k in [0, 1, 5, 100] {
                let keywords = analyzer.extract_keywords(ARTICLE, method, top_k);
                assert!(keywords.len() <= top_k);
                assert!(keywords.windows(2).all(|w| w[0].weight >= w[1].weight));
                assert!(keywords.iter().all(|k| k.weight >= 0.0));
                assert!(keywords.iter().all(|k| k.keyword.chars().count() >= 2));
            }
        }
    }

    #[test]
    fn analyzer_tfidf_finds_topic_words_test() {
        let analyzer = Analyzer::new();
        let top = analyzer.keyword_extract_tfidf(ARTICLE, 5);
        assert!(top.contains(&"人工智能".to_string()), "{top:?}");
        assert!(top.contains(&"机器学习".to_string()), "{top:?}");
        assert!(!top.iter().any(|w| analyzer.stopwords().contains(w)));
    }

    #[test]
    fn analyzer_textrank_finds_topic_words_test() {
        let analyzer = Analyzer::new();
        let top = analyzer.keyword_extract_textrank(ARTICLE, 10);
        assert!(top.contains(&"人工智能".to_string()), "{top:?}");
    }

    #[test]
    fn keyword_lines_round_trip_test() {
        let keywords = vec![
            Keyword {
                keyword: "人工智能".to_string(),
                weight: 1.234_567_89,
            },
            Keyword {
                keyword: "北京".to_string(),
                weight: 0.000_000_4,
            },
        ];
        let text = format_keywords(&keywords);
        assert_eq!(text, "人工智能: 1.234568\n北京: 0.000000");

        let parsed: Vec<Keyword> = text.lines().filter_map(parse_keyword_line).collect();
        assert_eq!(parsed.len(), keywords.len());
        for (a, b) in parsed.iter().zip(&keywords) {
            assert_eq!(a.keyword, b.keyword);
            assert!((a.weight - b.weight).abs() <= 1e-6);
        }
        assert!(parse_keyword_line("no separator").is_none());
        assert!(parse_keyword_line(": 1.0").is_none());
    }

    #[test]
    fn format_frequencies_test() {
        let ranked = vec![("爱".to_string(), 2), ("北京".to_string(), 1)];
        assert_eq!(format_frequencies(&ranked), "爱: 2\n北京: 1");
        assert_eq!(format_frequencies(&[]), "");
    }
}
