//! 测试用特征库样本（UAS ini 格式的精简子集）

pub const SAMPLE_DATABASE: &str = r#"; Data (format ini) for UASparser - http://user-agent-string.info/download/UASparser
; Version: 20240101-01
; Checksum:
; MD5 - 00000000000000000000000000000000

[robots]
1[] = "Googlebot/2.1 (+http://www.google.com/bot.html)"
1[] = "Googlebot"
1[] = "Googlebot/2.1"
1[] = "http://www.google.com/bot.html"
1[] = "Google Inc."
1[] = "http://www.google.com/"
1[] = "bot_googlebot.png"
1[] = "3"
1[] = "/list-of-ua/bot-detail?bot=Googlebot"
2[] = "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)"
2[] = "bingbot"
2[] = "bingbot/2.0"

[os]
1[] = "Windows"
1[] = "Windows 10"
1[] = "http://en.wikipedia.org/wiki/Windows_10"
1[] = "Microsoft Corporation."
1[] = "http://www.microsoft.com/"
1[] = "win-10.png"
2[] = "Android"
2[] = "Android 11"
2[] = "http://en.wikipedia.org/wiki/Android_(operating_system)"
2[] = "Google Inc."
2[] = "http://www.google.com/"
2[] = "android.png"
3[] = "Linux"
3[] = "Linux"
3[] = "http://en.wikipedia.org/wiki/Linux"
3[] = ""
3[] = ""
3[] = "linux.png"
4[] = "iOS"
4[] = "iOS"
4[] = "http://en.wikipedia.org/wiki/IOS"
4[] = "Apple Inc."
4[] = "http://www.apple.com/"
4[] = "iphone.png"

[browser]
1[] = "1"
1[] = "Chrome"
1[] = "http://www.google.com/chrome"
1[] = "Google Inc."
1[] = "http://www.google.com/"
1[] = "chrome.png"
1[] = "/list-of-ua/browser-detail?browser=Chrome"
2[] = "3"
2[] = "Chrome Mobile"
2[] = "http://www.google.com/chrome"
2[] = "Google Inc."
2[] = "http://www.google.com/"
2[] = "chrome.png"
2[] = "/list-of-ua/browser-detail?browser=Chrome Mobile"
3[] = "2"
3[] = "curl"
3[] = "http://curl.haxx.se/"
3[] = "Daniel Stenberg"
3[] = "http://www.haxx.se/"
3[] = "curl.png"
3[] = "/list-of-ua/browser-detail?browser=curl"
4[] = "99"
4[] = "Mystery"
4[] = ""
4[] = ""
4[] = ""
4[] = "unknown.png"
4[] = ""
5[] = "3"
5[] = "Mobile Safari"
5[] = "http://en.wikipedia.org/wiki/Safari_(web_browser)"
5[] = "Apple Inc."
5[] = "http://www.apple.com/"
5[] = "safari.png"
5[] = "/list-of-ua/browser-detail?browser=Mobile Safari"
6[] = "1"
6[] = "OrphanOS"
6[] = ""
6[] = ""
6[] = ""
6[] = "unknown.png"
6[] = ""

[browser_type]
1[] = "Browser"
2[] = "Library"
3[] = "Mobile Browser"

[browser_reg]
1[] = "/Chrome\/([0-9a-z\.]+).*Mobile/si"
1[] = "2"
2[] = "/Chrome\/([0-9a-z\.]+)/si"
2[] = "1"
3[] = "/curl\/([0-9a-z\.]+)/si"
3[] = "3"
4[] = "/Mystery\/([0-9a-z\.]+)/si"
4[] = "4"
5[] = "/Version\/([0-9a-z\.]+).*Mobile.*Safari/si"
5[] = "5"
6[] = "/Ghost\/([0-9a-z\.]+)/si"
6[] = "42"
7[] = "/OrphanOS\/([0-9a-z\.]+)/si"
7[] = "6"

[browser_os]
5[] = "4"
6[] = "77"

[os_reg]
1[] = "/Windows NT 10\.0/si"
1[] = "1"
2[] = "/Android/si"
2[] = "2"
3[] = "/Plan9/si"
3[] = "88"
4[] = "/Inferno/si"
4[] = "3"
5[] = "/Linux/si"
5[] = "3"

[device]
1[] = "Other"
1[] = "other.png"
1[] = "/list-of-ua/device-detail?device=Other"
2[] = "Personal computer"
2[] = "desktop.png"
2[] = "/list-of-ua/device-detail?device=Personal computer"
3[] = "Smartphone"
3[] = "smartphone.png"
3[] = "/list-of-ua/device-detail?device=Smartphone"
4[] = "Tablet"
4[] = "tablet.png"
4[] = "/list-of-ua/device-detail?device=Tablet"

[device_reg]
1[] = "/iPad/si"
1[] = "4"
2[] = "/SmartTV/si"
2[] = "99"
"#;
