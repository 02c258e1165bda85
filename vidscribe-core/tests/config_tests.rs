use std::path::PathBuf;
use vidscribe_core::config::{CoreConfigBuilder, DEFAULT_CHUNK_SIZE, DEFAULT_SAMPLE_INTERVAL_SECS};

#[test]
fn test_builder_defaults() {
    let config = CoreConfigBuilder::new().build();

    assert_eq!(config.output_dir, PathBuf::from("."));
    assert_eq!(
        config.extraction.sample_interval_secs,
        DEFAULT_SAMPLE_INTERVAL_SECS
    );
    assert_eq!(config.chunking.chunk_size, DEFAULT_CHUNK_SIZE);
    assert_eq!(config.extraction.ocr.page_seg_mode, 6);
    assert_eq!(config.extraction.ocr.engine_mode, 3);
    assert!(!config.extraction.keywords.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_pattern() {
    let config = CoreConfigBuilder::new()
        .output_dir(PathBuf::from("out"))
        .temp_dir(PathBuf::from("/tmp/vidscribe"))
        .sample_interval_secs(5.0)
        .ocr_language("deu")
        .ocr_page_seg_mode(11)
        .keywords(vec!["SELECT".to_string()])
        .ocr_workers(4)
        .frame_dump_dir(PathBuf::from("dump"))
        .whisper_model("small")
        .whisper_language("en")
        .chunk_size(1000)
        .chunk_overlap(100)
        .llm_endpoint("https://example.test/v1/chat/completions")
        .llm_model("test-model")
        .llm_temperature(0.7)
        .build();

    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert_eq!(config.temp_dir, Some(PathBuf::from("/tmp/vidscribe")));
    assert_eq!(config.extraction.sample_interval_secs, 5.0);
    assert_eq!(config.extraction.ocr.language, "deu");
    assert_eq!(config.extraction.ocr.page_seg_mode, 11);
    assert_eq!(config.extraction.keywords, vec!["SELECT".to_string()]);
    assert_eq!(config.extraction.ocr_workers, 4);
    assert_eq!(config.extraction.frame_dump_dir, Some(PathBuf::from("dump")));
    assert_eq!(config.transcription.model, "small");
    assert_eq!(config.transcription.language, Some("en".to_string()));
    assert_eq!(config.chunking.chunk_size, 1000);
    assert_eq!(config.chunking.chunk_overlap, 100);
    assert_eq!(
        config.generation.endpoint,
        "https://example.test/v1/chat/completions"
    );
    assert_eq!(config.generation.model, "test-model");
    assert_eq!(config.generation.temperature, 0.7);
    assert!(config.validate().is_ok());
}

#[test]
fn test_built_config_can_be_invalid() {
    // The builder does not validate; validate() catches the inconsistency.
    let config = CoreConfigBuilder::new()
        .chunk_size(100)
        .chunk_overlap(200)
        .build();
    assert!(config.validate().is_err());
}
