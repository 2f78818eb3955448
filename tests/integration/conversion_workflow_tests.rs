/*!
 * Integration tests for the chat to subtitle workflow
 */

use anyhow::Result;

use chat2ass::app_config::Config;
use chat2ass::ass_writer::CommentStyle;
use chat2ass::ban_rules::BanRuleSet;
use chat2ass::chat_source::ChatLog;
use chat2ass::comment_processor::convert;
use chat2ass::file_utils::FileManager;
use crate::common;

/// Load a chat file, convert it and write the ASS file
#[test]
fn test_conversion_workflow_withFullProcess_shouldWriteExpectedDocument() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let chat_path = common::create_test_chat(temp_dir.path(), "chat.json")?;

    let chat = ChatLog::load(&chat_path)?;
    let settings = Config::default().validate()?;
    let (document, stats) = convert(&chat.comments, &BanRuleSet::empty(), &settings);

    let output_path = temp_dir.path().join("chat.ass");
    document.write_to_ass(&output_path)?;

    let content = FileManager::read_to_string(&output_path)?;
    let dialogue: Vec<&str> = content.lines().filter(|l| l.starts_with("Dialogue:")).collect();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.kept, 3);
    assert_eq!(dialogue, vec![
        "Dialogue: 2,0:00:00.00,0:00:07.00,Danmaku2ASS,,0000,0000,0000,,{\\move(854,0,-180,0)}hello",
        "Dialogue: 2,0:00:00.00,0:00:07.00,Danmaku2ASS,,0000,0000,0000,,{\\move(854,36,-180,36)}hello",
        "Dialogue: 2,0:00:05.00,0:00:12.00,Danmaku2ASS,,0000,0000,0000,,{\\move(854,0,-180,0)}world",
    ]);
    assert!(content.starts_with("[Script Info]\nScriptType: v4.00+\nPlayResX: 854\nPlayResY: 480\n"));
    assert!(content.ends_with("}world\n"));

    Ok(())
}

/// Ban rules from a file, a time window and a custom canvas all apply together
#[test]
fn test_conversion_workflow_withBanFileAndRange_shouldFilterAndShift() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let chat_content = common::chat_json(&[
        (50.0, "before start", "a", "1"),
        (60.0, "gg wwwwwwww", "b", "2"),
        (60.5, "buy cheap followers", "spammer", "3"),
        (61.0, "hi from troll", "troll", "4"),
        (60.8, "nice. play lol", "c", "5"),
        (61.4, "lol", "d", "6"),
        (120.0, "at the end", "e", "7"),
        (121.0, "after end", "f", "8"),
    ]);
    let chat_path = common::create_test_file(temp_dir.path(), "stream.json", &chat_content)?;
    let ban_path = common::create_test_file(
        temp_dir.path(),
        "ban.json",
        r#"{"remove_words": ["lol"], "ban_comments": ["followers"], "ban_users": ["troll"], "ban_critical": []}"#,
    )?;

    let config = Config {
        start_time: "0:1:0".to_string(),
        end_time: "0:2:0".to_string(),
        play_res_x: 1280,
        play_res_y: 720,
        font_size: 40,
        visible_time_secs: 5,
        style: CommentStyle::Blue,
        ..Config::default()
    };
    let settings = config.validate()?;
    let rules = BanRuleSet::load(Some(&ban_path))?;
    let chat = ChatLog::load(&chat_path)?;

    let (document, stats) = convert(&chat.comments, &rules, &settings);

    assert_eq!(stats.total, 8);
    assert_eq!(stats.out_of_range, 2);
    assert_eq!(stats.banned, 2);
    assert_eq!(stats.empty, 1);
    assert_eq!(stats.kept, 3);
    assert_eq!(stats.skipped(), 5);

    assert_eq!(document.lines, vec![
        "Dialogue: 2,0:00:00.00,0:00:05.00,danmakuBlue,,0000,0000,0000,,{\\move(1280,0,-240,0)}gg www".to_string(),
        "Dialogue: 2,0:00:00.00,0:00:05.00,danmakuBlue,,0000,0000,0000,,{\\move(1280,40,-400,40)}nice  play".to_string(),
        "Dialogue: 2,0:01:00.00,0:01:05.00,danmakuBlue,,0000,0000,0000,,{\\move(1280,0,-400,0)}at the end".to_string(),
    ]);
    assert!(document.header.contains("PlayResX: 1280\nPlayResY: 720\n"));
    assert!(document.header.contains("Style: danmakuBlue, sans-serif, 40,"));

    Ok(())
}

/// A malformed ban file stops the run before anything is converted
#[test]
fn test_conversion_workflow_withMalformedBanFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let ban_path = common::create_test_file(
        temp_dir.path(),
        "ban.json",
        r#"{"remove_words": [], "ban_comments": []}"#,
    )?;

    assert!(BanRuleSet::load(Some(&ban_path)).is_err());

    Ok(())
}
