/// 找不到题目文档时使用的内置题目
pub const DEFAULT_QUESTIONS: &str = "\
# 回顾
今天最有收获的一件事是什么？
今天有什么事情没有按计划完成？为什么？
今天我学到了什么新东西？
今天遇到的最大困难是什么？

# 情绪
今天什么时候感觉最好？
今天有什么让我感到焦虑或不安？
我现在的精力状态怎么样？

# 感恩
今天我想感谢谁？
今天有什么小事让我感到开心？

# 明天
明天最重要的一件事是什么？
明天我想做出什么改变？
";
