mod file_corpus_source_test;
